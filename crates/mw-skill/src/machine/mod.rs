//! The quiz dialogue state machine.
//!
//! Each [`QuizState`] has a dispatch table mapping an [`Intent`] to a
//! handler. A handler receives the turn's shared resources, the session and
//! the event, mutates the session and returns the response.

mod quiz;
mod setup;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::attributes::AttributeStore;
use crate::config::SkillConfig;
use crate::error::SkillResult;
use crate::intent::{Intent, IntentEvent};
use crate::response::SkillResponse;
use crate::session::{QuizSession, QuizState};
use crate::templates::{TemplateKey, TemplateRegistry};

/// Resources a handler may use during one turn.
pub(crate) struct Turn<'a> {
    templates: &'a TemplateRegistry,
    rng: &'a mut StdRng,
}

impl Turn<'_> {
    fn text(&self, key: TemplateKey) -> SkillResult<String> {
        self.templates.text(key)
    }

    fn render(&self, key: TemplateKey, args: &[&str]) -> SkillResult<String> {
        self.templates.render(key, args)
    }

    fn question(&self, spoken: &str) -> SkillResult<String> {
        self.render(TemplateKey::Question, &[spoken])
    }
}

/// A state's handler for one intent.
pub(crate) type Handler =
    fn(&mut Turn<'_>, &mut QuizSession, &IntentEvent) -> SkillResult<SkillResponse>;

fn handler_for(state: QuizState, intent: Intent) -> Handler {
    match state {
        QuizState::Setup => setup::handler(intent),
        QuizState::Quiz => quiz::handler(intent),
    }
}

/// Start over from the welcome prompt.
fn launch(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    _event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    session.reset();
    setup::enter(turn)
}

/// Say goodbye and close the conversation.
fn goodbye(
    turn: &mut Turn<'_>,
    _session: &mut QuizSession,
    _event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    Ok(SkillResponse::tell(turn.text(TemplateKey::Goodbye)?))
}

/// The Math Wiz skill.
///
/// Owns the prompt templates and the random source. Sessions are passed in
/// per turn, so one skill can serve any number of conversations.
pub struct MathQuizSkill {
    templates: TemplateRegistry,
    rng: StdRng,
}

impl MathQuizSkill {
    /// Create a skill from its configuration.
    pub fn new(config: SkillConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            templates: config.templates,
            rng,
        }
    }

    /// The prompt templates in use.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Run one turn against the session stored in `attributes`.
    ///
    /// The store is only updated when the turn succeeds.
    pub fn handle_turn(
        &mut self,
        attributes: &mut AttributeStore,
        event: &IntentEvent,
    ) -> SkillResult<SkillResponse> {
        let mut session = attributes.load_session()?;
        let response = self.handle(&mut session, event)?;
        attributes.save_session(&session)?;
        Ok(response)
    }

    /// Run one turn against an in-memory session.
    pub fn handle(
        &mut self,
        session: &mut QuizSession,
        event: &IntentEvent,
    ) -> SkillResult<SkillResponse> {
        let intent = event.intent();
        let before = session.state();
        debug!(state = ?before, %intent, slot = ?event.slot(), "handling turn");

        let handler = handler_for(before, intent);
        let mut turn = Turn {
            templates: &self.templates,
            rng: &mut self.rng,
        };
        let response = handler(&mut turn, session, event)?;

        if session.state() != before {
            info!(from = ?before, to = ?session.state(), "state transition");
        }
        if !response.keep_session_open {
            debug!("conversation closed");
        }
        Ok(response)
    }
}
