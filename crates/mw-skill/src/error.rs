//! Error types for the quiz skill.

use thiserror::Error;

/// Result type for skill operations.
pub type SkillResult<T> = Result<T, SkillError>;

/// Errors that can occur while handling a turn.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The problem generator was called outside its contract.
    #[error("{0}")]
    Core(#[from] mw_core::CoreError),

    /// A template table is missing a key.
    #[error("template table '{locale}' is missing {key}")]
    MissingTemplate {
        /// Locale of the table.
        locale: String,
        /// Name of the missing key.
        key: &'static str,
    },

    /// A template table contains a key this skill does not know.
    #[error("unknown template key: {0}")]
    UnknownTemplate(String),

    /// A template was given or declares the wrong number of `%s` arguments.
    #[error("template {key} takes {expected} argument(s), found {found}")]
    TemplateArity {
        /// Name of the template key.
        key: &'static str,
        /// Arguments the key takes.
        expected: usize,
        /// Arguments supplied or placeholders present.
        found: usize,
    },

    /// The session attribute store holds an inconsistent session.
    #[error("corrupt session: {0}")]
    CorruptSession(String),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
