//! Inbound intent events.

use serde::{Deserialize, Serialize};

/// The intents the skill reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The skill was opened.
    Launch,
    /// The player said a value (a number, normally).
    Response,
    /// "Yes".
    Yes,
    /// "No".
    No,
    /// "Say that again".
    Repeat,
    /// "Help".
    Help,
    /// "Cancel".
    Cancel,
    /// "Stop".
    Stop,
    /// The platform closed the conversation.
    SessionEnded,
    /// Anything else.
    Unhandled,
}

impl Intent {
    /// Map a platform intent name to an intent.
    pub fn from_name(name: &str) -> Self {
        match name {
            "LaunchRequest" => Self::Launch,
            "ResponseIntent" => Self::Response,
            "AMAZON.YesIntent" => Self::Yes,
            "AMAZON.NoIntent" => Self::No,
            "AMAZON.RepeatIntent" => Self::Repeat,
            "AMAZON.HelpIntent" => Self::Help,
            "AMAZON.CancelIntent" => Self::Cancel,
            "AMAZON.StopIntent" => Self::Stop,
            "SessionEndedRequest" | "AMAZON.SessionEndedRequest" => Self::SessionEnded,
            _ => Self::Unhandled,
        }
    }

    /// The platform name of this intent.
    pub fn name(self) -> &'static str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::Response => "ResponseIntent",
            Self::Yes => "AMAZON.YesIntent",
            Self::No => "AMAZON.NoIntent",
            Self::Repeat => "AMAZON.RepeatIntent",
            Self::Help => "AMAZON.HelpIntent",
            Self::Cancel => "AMAZON.CancelIntent",
            Self::Stop => "AMAZON.StopIntent",
            Self::SessionEnded => "SessionEndedRequest",
            Self::Unhandled => "Unhandled",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One turn's input, as delivered by the voice platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentEvent {
    /// Platform intent name, e.g. `"AMAZON.YesIntent"`.
    pub intent_name: String,
    /// The value of the `response` slot, if the intent carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_value: Option<String>,
}

impl IntentEvent {
    /// An event without a slot value.
    pub fn new(intent: Intent) -> Self {
        Self {
            intent_name: intent.name().to_string(),
            slot_value: None,
        }
    }

    /// A `ResponseIntent` carrying the spoken value.
    pub fn response(value: impl Into<String>) -> Self {
        Self {
            intent_name: Intent::Response.name().to_string(),
            slot_value: Some(value.into()),
        }
    }

    /// The parsed intent.
    pub fn intent(&self) -> Intent {
        Intent::from_name(&self.intent_name)
    }

    /// The slot value, if present.
    pub fn slot(&self) -> Option<&str> {
        self.slot_value.as_deref()
    }
}
