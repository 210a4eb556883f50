//! Localized prompt templates.
//!
//! Each [`TemplateKey`] has a fixed number of `%s` placeholders that are
//! filled positionally by [`TemplateRegistry::render`]. Tables are checked
//! for completeness and placeholder counts when they are loaded, so a turn
//! never fails on a malformed translation.

use std::collections::HashMap;

use crate::error::{SkillError, SkillResult};

/// Placeholder replaced by positional arguments.
const PLACEHOLDER: &str = "%s";

/// Every prompt the skill can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// Greeting on launch.
    Welcome,
    /// Asks for the difficulty level.
    LevelConfigPrompt,
    /// Level out of range.
    LevelConfigError,
    /// Asks for the number of problems.
    QuizLengthPrompt,
    /// Problem count out of range.
    QuizLengthError,
    /// Repeats the settings back: level, count.
    Confirmation,
    /// Spoken before the first problem.
    CountdownStart,
    /// Spoken once the player is half way through.
    HalfwayMessage,
    /// Asks a problem: spoken problem.
    Question,
    /// Reaction to an answer: exclamation.
    AnswerResponse,
    /// Final score: score, count.
    GameOver,
    /// Offers another quiz.
    PlayAgainPrompt,
    /// Ends the conversation.
    Goodbye,
    /// Explains how to answer.
    Help,
}

impl TemplateKey {
    /// All keys.
    pub const ALL: [TemplateKey; 14] = [
        TemplateKey::Welcome,
        TemplateKey::LevelConfigPrompt,
        TemplateKey::LevelConfigError,
        TemplateKey::QuizLengthPrompt,
        TemplateKey::QuizLengthError,
        TemplateKey::Confirmation,
        TemplateKey::CountdownStart,
        TemplateKey::HalfwayMessage,
        TemplateKey::Question,
        TemplateKey::AnswerResponse,
        TemplateKey::GameOver,
        TemplateKey::PlayAgainPrompt,
        TemplateKey::Goodbye,
        TemplateKey::Help,
    ];

    /// The key's name in a template table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Welcome => "WELCOME_MESSAGE",
            Self::LevelConfigPrompt => "LEVEL_CONFIG_PROMPT",
            Self::LevelConfigError => "LEVEL_CONFIG_ERROR",
            Self::QuizLengthPrompt => "QUIZ_LENGTH_PROMPT",
            Self::QuizLengthError => "QUIZ_LENGTH_ERROR",
            Self::Confirmation => "CONFIRMATION_MESSAGE",
            Self::CountdownStart => "COUNTDOWN_START",
            Self::HalfwayMessage => "HALFWAY_MESSAGE",
            Self::Question => "QUESTION",
            Self::AnswerResponse => "ANSWER_RESPONSE",
            Self::GameOver => "GAME_OVER_MESSAGE",
            Self::PlayAgainPrompt => "PLAY_AGAIN_PROMPT",
            Self::Goodbye => "GOODBYE_MESSAGE",
            Self::Help => "HELP_MESSAGE",
        }
    }

    /// Look a key up by its table name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Number of `%s` arguments the template takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Question | Self::AnswerResponse => 1,
            Self::Confirmation | Self::GameOver => 2,
            _ => 0,
        }
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const ENGLISH: [(TemplateKey, &str); 14] = [
    (TemplateKey::Welcome, "Welcome to Math Wiz! "),
    (
        TemplateKey::LevelConfigPrompt,
        "What level do you want for your quiz? ",
    ),
    (
        TemplateKey::LevelConfigError,
        "Sorry, there are only levels 1 through 3. Please choose another level. ",
    ),
    (
        TemplateKey::QuizLengthPrompt,
        "How many math problems do you want to do? ",
    ),
    (
        TemplateKey::QuizLengthError,
        "Sorry, there can only be 1 to a max of 20 math problems. Please give another quantity. ",
    ),
    (
        TemplateKey::Confirmation,
        "Okay, the math quiz will be level %s and will have %s problems. Is that correct? ",
    ),
    (TemplateKey::CountdownStart, "Three, two, one. "),
    (TemplateKey::HalfwayMessage, "You're half way there! "),
    (TemplateKey::Question, "What is %s? "),
    (
        TemplateKey::AnswerResponse,
        "<say-as interpret-as='interjection'>%s!</say-as> ",
    ),
    (
        TemplateKey::GameOver,
        "You got %s out of %s questions correct. ",
    ),
    (
        TemplateKey::PlayAgainPrompt,
        "Would you like to do another math quiz? ",
    ),
    (
        TemplateKey::Goodbye,
        "Okay, we'll play another time. Goodbye! ",
    ),
    (
        TemplateKey::Help,
        "Answer each question by saying a number. You can say repeat to hear it again, or stop to quit. ",
    ),
];

/// A complete table of prompt templates for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    locale: String,
    texts: HashMap<TemplateKey, String>,
}

impl TemplateRegistry {
    /// The built-in English table.
    pub fn english() -> Self {
        Self {
            locale: "en".to_string(),
            texts: ENGLISH
                .iter()
                .map(|(key, text)| (*key, (*text).to_string()))
                .collect(),
        }
    }

    /// Load a table from a JSON object mapping key names to template text.
    pub fn from_json(locale: impl Into<String>, json: &str) -> SkillResult<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(locale, raw)
    }

    /// Build a table from `(key name, text)` pairs.
    ///
    /// Every key must be present with the right number of placeholders.
    /// Unknown key names are rejected.
    pub fn from_entries(
        locale: impl Into<String>,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> SkillResult<Self> {
        let locale = locale.into();
        let mut texts = HashMap::new();
        for (name, text) in entries {
            let key = TemplateKey::from_name(&name).ok_or(SkillError::UnknownTemplate(name))?;
            let found = text.matches(PLACEHOLDER).count();
            if found != key.arity() {
                return Err(SkillError::TemplateArity {
                    key: key.name(),
                    expected: key.arity(),
                    found,
                });
            }
            texts.insert(key, text);
        }

        if let Some(missing) = TemplateKey::ALL.into_iter().find(|k| !texts.contains_key(k)) {
            return Err(SkillError::MissingTemplate {
                locale,
                key: missing.name(),
            });
        }

        Ok(Self { locale, texts })
    }

    /// The locale this table speaks.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The raw template for a key.
    pub fn template(&self, key: TemplateKey) -> SkillResult<&str> {
        self.texts
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| SkillError::MissingTemplate {
                locale: self.locale.clone(),
                key: key.name(),
            })
    }

    /// Render a template, filling `%s` placeholders from `args` in order.
    pub fn render(&self, key: TemplateKey, args: &[&str]) -> SkillResult<String> {
        if args.len() != key.arity() {
            return Err(SkillError::TemplateArity {
                key: key.name(),
                expected: key.arity(),
                found: args.len(),
            });
        }

        let template = self.template(key)?;
        let mut pieces = template.split(PLACEHOLDER);
        let capacity = template.len() + args.iter().map(|a| a.len()).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        out.push_str(pieces.next().unwrap_or_default());
        for (arg, piece) in args.iter().zip(pieces) {
            out.push_str(arg);
            out.push_str(piece);
        }
        Ok(out)
    }

    /// Render a template that takes no arguments.
    pub fn text(&self, key: TemplateKey) -> SkillResult<String> {
        self.render(key, &[])
    }
}
