//! Voice quiz skill for Math Wiz.
//!
//! The hosting voice platform turns each spoken turn into an
//! [`IntentEvent`]. [`MathQuizSkill`] loads the conversation's
//! [`QuizSession`] from its [`AttributeStore`], runs the handler for the
//! current state, writes the session back and returns a [`SkillResponse`].

pub mod attributes;
pub mod config;
pub mod error;
pub mod intent;
pub mod machine;
pub mod phrases;
pub mod response;
pub mod session;
pub mod templates;

pub use attributes::AttributeStore;
pub use config::SkillConfig;
pub use error::{SkillError, SkillResult};
pub use intent::{Intent, IntentEvent};
pub use machine::MathQuizSkill;
pub use response::SkillResponse;
pub use session::{QuizSession, QuizState, SetupField};
pub use templates::{TemplateKey, TemplateRegistry};
