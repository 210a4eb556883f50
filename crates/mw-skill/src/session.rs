//! Per-conversation quiz state.
//!
//! A `QuizSession` holds everything one conversation needs between turns:
//! which state the dialogue is in, the settings chosen during setup, and
//! the running quiz. It is owned by the conversation and saved to the
//! attribute store after each turn.

use serde::{Deserialize, Serialize};

use mw_core::{Level, Problem};

use crate::config::{MAX_PROBLEMS, MIN_PROBLEMS};
use crate::error::{SkillError, SkillResult};

/// The dialogue state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizState {
    /// Collecting problem count and level.
    #[default]
    Setup,
    /// Asking problems, then offering another quiz.
    Quiz,
}

/// The next thing setup is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    /// How many problems.
    ProblemCount,
    /// Which difficulty level.
    Level,
    /// Yes or no on the chosen settings.
    Confirmation,
}

/// One conversation's quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizSession {
    state: QuizState,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem_count: Option<usize>,
    problems: Vec<Problem>,
    answers: Vec<u32>,
    spoken_problems: Vec<String>,
    current_problem: usize,
    score: usize,
}

impl QuizSession {
    /// A fresh session waiting in setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dialogue state.
    pub fn state(&self) -> QuizState {
        self.state
    }

    /// The chosen level, once set.
    pub fn level(&self) -> Option<Level> {
        self.level
    }

    /// The chosen number of problems, once set.
    pub fn problem_count(&self) -> Option<usize> {
        self.problem_count
    }

    /// The problems of the running quiz.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Correct answers, parallel to [`problems`](Self::problems).
    pub fn answers(&self) -> &[u32] {
        &self.answers
    }

    /// Spoken renderings, parallel to [`problems`](Self::problems).
    pub fn spoken_problems(&self) -> &[String] {
        &self.spoken_problems
    }

    /// Index of the problem awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.current_problem
    }

    /// Correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// What setup is waiting for.
    pub fn pending_field(&self) -> SetupField {
        match (self.problem_count, self.level) {
            (None, _) => SetupField::ProblemCount,
            (Some(_), None) => SetupField::Level,
            (Some(_), Some(_)) => SetupField::Confirmation,
        }
    }

    /// Whether every problem of the running quiz has been answered.
    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Quiz && self.current_problem >= self.problems.len()
    }

    /// The spoken form of the problem awaiting an answer.
    pub fn current_question(&self) -> Option<&str> {
        self.spoken_problems
            .get(self.current_problem)
            .map(String::as_str)
    }

    /// The correct answer to the problem awaiting an answer.
    pub fn current_answer(&self) -> Option<u32> {
        self.answers.get(self.current_problem).copied()
    }

    /// The answer count after which the half way message is spoken:
    /// `count / 2` rounded up.
    pub fn midpoint(&self) -> usize {
        self.problems.len().div_ceil(2)
    }

    /// Store the problem count. Returns `false` if it is out of range.
    pub fn set_problem_count(&mut self, count: usize) -> bool {
        if !(MIN_PROBLEMS..=MAX_PROBLEMS).contains(&count) {
            return false;
        }
        self.problem_count = Some(count);
        true
    }

    /// Store the level.
    pub fn set_level(&mut self, level: Level) {
        self.level = Some(level);
    }

    /// Forget the setup answers so setup starts over.
    pub fn clear_setup(&mut self) {
        self.level = None;
        self.problem_count = None;
    }

    /// Start a quiz over `problems`, deriving answers and spoken forms.
    pub fn start_quiz(&mut self, problems: Vec<Problem>) {
        self.answers = problems.iter().map(Problem::answer).collect();
        self.spoken_problems = problems.iter().map(Problem::spoken).collect();
        self.problems = problems;
        self.current_problem = 0;
        self.score = 0;
        self.state = QuizState::Quiz;
    }

    /// Record the current answer and move to the next problem.
    ///
    /// Returns the new index.
    pub fn record_answer(&mut self, correct: bool) -> usize {
        if correct {
            self.score += 1;
        }
        self.current_problem += 1;
        self.current_problem
    }

    /// Drop everything and go back to setup.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check that a session decoded from storage is consistent.
    pub fn validate(&self) -> SkillResult<()> {
        let n = self.problems.len();
        if self.answers.len() != n || self.spoken_problems.len() != n {
            return Err(corrupt(format!(
                "{n} problems but {} answers and {} spoken forms",
                self.answers.len(),
                self.spoken_problems.len()
            )));
        }
        if let Some(count) = self.problem_count
            && !(MIN_PROBLEMS..=MAX_PROBLEMS).contains(&count)
        {
            return Err(corrupt(format!("problem count {count} out of range")));
        }
        if let Some((i, _)) = self
            .problems
            .iter()
            .zip(&self.answers)
            .enumerate()
            .find(|(_, (p, a))| p.answer() != **a)
        {
            return Err(corrupt(format!("answer {i} does not match its problem")));
        }
        if let Some((i, _)) = self
            .problems
            .iter()
            .zip(&self.spoken_problems)
            .enumerate()
            .find(|(_, (p, spoken))| p.spoken() != **spoken)
        {
            return Err(corrupt(format!("spoken form {i} does not match its problem")));
        }
        if self.current_problem > n {
            return Err(corrupt(format!(
                "current problem {} past the end of {n}",
                self.current_problem
            )));
        }
        if self.score > self.current_problem {
            return Err(corrupt(format!(
                "score {} exceeds answered problems {}",
                self.score, self.current_problem
            )));
        }

        match self.state {
            QuizState::Setup if n > 0 => Err(corrupt("setup session holds quiz problems")),
            QuizState::Setup if self.level.is_some() && self.problem_count.is_none() => {
                Err(corrupt("setup session has a level but no problem count"))
            }
            QuizState::Quiz if n == 0 => Err(corrupt("quiz session has no problems")),
            QuizState::Quiz if self.level.is_none() || self.problem_count != Some(n) => Err(
                corrupt(format!("quiz of {n} problems does not match its settings")),
            ),
            _ => Ok(()),
        }
    }
}

fn corrupt(msg: impl Into<String>) -> SkillError {
    SkillError::CorruptSession(msg.into())
}
