//! Outbound responses.

use serde::{Deserialize, Serialize};

/// What the skill says back for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    /// Text to speak.
    pub prompt_text: String,
    /// Text to speak if the player stays silent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt_text: Option<String>,
    /// Whether the conversation continues after this turn.
    pub keep_session_open: bool,
}

impl SkillResponse {
    /// Speak and wait for an answer.
    pub fn ask(prompt: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt.into(),
            reprompt_text: None,
            keep_session_open: true,
        }
    }

    /// Speak, wait for an answer, and reprompt with `reprompt` on silence.
    pub fn ask_with_reprompt(prompt: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt.into(),
            reprompt_text: Some(reprompt.into()),
            keep_session_open: true,
        }
    }

    /// Speak and end the conversation.
    pub fn tell(prompt: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt.into(),
            reprompt_text: None,
            keep_session_open: false,
        }
    }
}
