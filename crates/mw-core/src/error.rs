//! Error types for problem generation.

use thiserror::Error;

/// Result type for problem generation.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when the generator is used outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Difficulty level outside 1-3.
    #[error("invalid level: {0} (expected 1-3)")]
    InvalidLevel(i64),

    /// A batch must contain at least one problem.
    #[error("invalid problem count: {0} (expected at least 1)")]
    InvalidCount(usize),

    /// Operands violate the ranges or constraints of their operand kind.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),
}
