//! Setup state: collect problem count and level, then confirm.

use tracing::{debug, info};

use mw_core::{Level, generate};

use super::{Handler, Turn, goodbye, launch, quiz};
use crate::error::SkillResult;
use crate::intent::{Intent, IntentEvent};
use crate::response::SkillResponse;
use crate::session::{QuizSession, SetupField};
use crate::templates::TemplateKey;

pub(super) fn handler(intent: Intent) -> Handler {
    match intent {
        Intent::Launch => launch,
        Intent::Response => on_response,
        Intent::Yes => on_yes,
        Intent::No => on_no,
        Intent::Help => on_help,
        Intent::Repeat | Intent::Unhandled => on_repeat,
        Intent::Cancel | Intent::Stop | Intent::SessionEnded => goodbye,
    }
}

/// Welcome the player and ask for the problem count.
pub(super) fn enter(turn: &mut Turn<'_>) -> SkillResult<SkillResponse> {
    let prompt = turn.text(TemplateKey::QuizLengthPrompt)?;
    let welcome = turn.text(TemplateKey::Welcome)? + &prompt;
    Ok(SkillResponse::ask_with_reprompt(welcome, prompt))
}

fn on_response(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    match session.pending_field() {
        SetupField::ProblemCount => {
            let accepted = event
                .slot()
                .and_then(|s| s.trim().parse::<usize>().ok())
                .is_some_and(|n| session.set_problem_count(n));
            if accepted {
                debug!(count = ?session.problem_count(), "problem count set");
                Ok(SkillResponse::ask(turn.text(TemplateKey::LevelConfigPrompt)?))
            } else {
                Ok(SkillResponse::ask_with_reprompt(
                    turn.text(TemplateKey::QuizLengthError)?,
                    turn.text(TemplateKey::QuizLengthPrompt)?,
                ))
            }
        }
        SetupField::Level => match event.slot().and_then(Level::parse) {
            Some(level) => {
                debug!(%level, "level set");
                session.set_level(level);
                confirm(turn, session)
            }
            None => Ok(SkillResponse::ask_with_reprompt(
                turn.text(TemplateKey::LevelConfigError)?,
                turn.text(TemplateKey::LevelConfigPrompt)?,
            )),
        },
        SetupField::Confirmation => confirm(turn, session),
    }
}

fn on_yes(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    let (Some(level), Some(count)) = (session.level(), session.problem_count()) else {
        return on_repeat(turn, session, event);
    };

    let problems = generate(level, count, turn.rng)?;
    session.start_quiz(problems);
    info!(%level, count, "quiz started");
    quiz::enter(turn, session)
}

fn on_no(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    _event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    session.clear_setup();
    enter(turn)
}

fn on_repeat(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    _event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    let prompt = pending_prompt(turn, session)?;
    Ok(SkillResponse::ask(prompt))
}

fn on_help(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    _event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    let prompt = pending_prompt(turn, session)?;
    let help = turn.text(TemplateKey::Help)? + &prompt;
    Ok(SkillResponse::ask_with_reprompt(help, prompt))
}

fn confirm(turn: &mut Turn<'_>, session: &QuizSession) -> SkillResult<SkillResponse> {
    Ok(SkillResponse::ask(pending_prompt(turn, session)?))
}

fn pending_prompt(turn: &Turn<'_>, session: &QuizSession) -> SkillResult<String> {
    match (session.pending_field(), session.level(), session.problem_count()) {
        (SetupField::Confirmation, Some(level), Some(count)) => turn.render(
            TemplateKey::Confirmation,
            &[&level.to_string(), &count.to_string()],
        ),
        (SetupField::Level, ..) => turn.text(TemplateKey::LevelConfigPrompt),
        _ => turn.text(TemplateKey::QuizLengthPrompt),
    }
}
