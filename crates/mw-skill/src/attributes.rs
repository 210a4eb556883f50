//! The conversation's session attribute store.
//!
//! The voice platform hands back whatever attributes the skill stored on the
//! previous turn. Quiz state lives under a fixed set of keys; other keys are
//! left alone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::SkillResult;
use crate::session::QuizSession;

/// Keys the quiz session is stored under.
pub const SESSION_KEYS: [&str; 8] = [
    "state",
    "level",
    "problemCount",
    "problems",
    "answers",
    "spokenProblems",
    "currentProblem",
    "score",
];

/// String-keyed JSON attributes that persist for one conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeStore(Map<String, Value>);

impl AttributeStore {
    /// An empty store, as at the start of a conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store from a JSON object.
    pub fn from_json(json: &str) -> SkillResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the store to a JSON object.
    pub fn to_json(&self) -> SkillResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get an attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set an attribute, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Remove an attribute.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the quiz session. Missing keys take their fresh-session
    /// defaults, so an empty store yields a new session in setup.
    pub fn load_session(&self) -> SkillResult<QuizSession> {
        let fields: Map<String, Value> = SESSION_KEYS
            .iter()
            .filter_map(|k| self.0.get(*k).map(|v| ((*k).to_string(), v.clone())))
            .collect();
        let session: QuizSession = serde_json::from_value(Value::Object(fields))?;
        if let Err(e) = session.validate() {
            warn!(error = %e, "rejecting stored session");
            return Err(e);
        }
        Ok(session)
    }

    /// Encode the quiz session, replacing any previously stored one.
    pub fn save_session(&mut self, session: &QuizSession) -> SkillResult<()> {
        for key in SESSION_KEYS {
            self.0.remove(key);
        }
        if let Value::Object(fields) = serde_json::to_value(session)? {
            self.0.extend(fields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkillError;
    use crate::session::QuizState;
    use mw_core::{Level, OperandKind, Problem};
    use serde_json::json;

    fn quiz_session() -> QuizSession {
        let mut s = QuizSession::new();
        s.set_problem_count(2);
        s.set_level(Level::Two);
        s.start_quiz(vec![
            Problem::new(7, OperandKind::Multiply, 6).unwrap(),
            Problem::new(12, OperandKind::Divide, 4).unwrap(),
        ]);
        s.record_answer(true);
        s
    }

    #[test]
    fn empty_store_is_fresh_session() {
        let session = AttributeStore::new().load_session().unwrap();
        assert_eq!(session, QuizSession::new());
    }

    #[test]
    fn save_then_load() {
        let session = quiz_session();
        let mut store = AttributeStore::new();
        store.save_session(&session).unwrap();
        assert_eq!(store.get("currentProblem"), Some(&json!(1)));
        assert_eq!(store.get("score"), Some(&json!(1)));
        assert_eq!(store.get("state"), Some(&json!("quiz")));
        assert_eq!(store.get("answers"), Some(&json!([42, 3])));
        assert_eq!(store.load_session().unwrap(), session);
    }

    #[test]
    fn unset_fields_are_removed() {
        let mut store = AttributeStore::new();
        store.save_session(&quiz_session()).unwrap();
        store.save_session(&QuizSession::new()).unwrap();
        assert!(store.get("level").is_none());
        assert!(store.get("problemCount").is_none());
        assert_eq!(store.get("state"), Some(&json!("setup")));
        assert_eq!(store.load_session().unwrap().state(), QuizState::Setup);
    }

    #[test]
    fn foreign_keys_survive() {
        let mut store = AttributeStore::new();
        store.insert("locale", json!("en-US"));
        store.save_session(&quiz_session()).unwrap();
        assert_eq!(store.get("locale"), Some(&json!("en-US")));
        store.remove("locale");
        assert_eq!(store.len(), SESSION_KEYS.len());
    }

    #[test]
    fn corrupt_store_rejected() {
        let mut store = AttributeStore::new();
        store.save_session(&quiz_session()).unwrap();
        store.insert("currentProblem", json!(9));
        assert!(matches!(
            store.load_session(),
            Err(SkillError::CorruptSession(_))
        ));
    }

    #[test]
    fn invalid_problem_rejected() {
        let store = AttributeStore::from_json(
            r#"{"state":"quiz","level":1,"problemCount":1,
                "problems":[{"first":2,"kind":"subtract","second":5}],
                "answers":[0],"spokenProblems":["2 minus 5"]}"#,
        )
        .unwrap();
        assert!(matches!(store.load_session(), Err(SkillError::Json(_))));
    }

    #[test]
    fn json_roundtrip() {
        let mut store = AttributeStore::new();
        store.save_session(&quiz_session()).unwrap();
        let json = store.to_json().unwrap();
        assert_eq!(AttributeStore::from_json(&json).unwrap(), store);
    }
}
