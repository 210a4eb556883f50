//! Arithmetic problem generation for the Math Wiz quiz.
//!
//! A difficulty [`Level`] decides which [`OperandKind`]s may appear in a
//! quiz. [`generate`] draws a batch of [`Problem`]s from a seeded RNG, each
//! of which knows its exact answer and how to be read aloud.

pub mod error;
pub mod generator;
pub mod level;
pub mod problem;

pub use error::{CoreError, CoreResult};
pub use generator::{generate, generate_problem};
pub use level::Level;
pub use problem::{OperandKind, Problem};
