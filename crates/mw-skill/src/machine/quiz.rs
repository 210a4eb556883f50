//! Quiz state: ask problems, grade answers, offer another round.

use tracing::debug;

use super::{Handler, Turn, goodbye, launch, setup};
use crate::error::SkillResult;
use crate::intent::{Intent, IntentEvent};
use crate::phrases::exclamation;
use crate::response::SkillResponse;
use crate::session::QuizSession;
use crate::templates::TemplateKey;

pub(super) fn handler(intent: Intent) -> Handler {
    match intent {
        Intent::Launch => launch,
        Intent::Response => on_answer,
        Intent::Yes => on_yes,
        Intent::Help => on_help,
        Intent::Repeat | Intent::Unhandled => on_repeat,
        Intent::No | Intent::Cancel | Intent::Stop | Intent::SessionEnded => goodbye,
    }
}

/// Count down and ask the first problem.
pub(super) fn enter(turn: &mut Turn<'_>, session: &QuizSession) -> SkillResult<SkillResponse> {
    let question = current_prompt(turn, session)?;
    let prompt = turn.text(TemplateKey::CountdownStart)? + &question;
    Ok(SkillResponse::ask_with_reprompt(prompt, question))
}

fn on_answer(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    let Some(expected) = session.current_answer() else {
        return on_repeat(turn, session, event);
    };

    let given = event.slot().and_then(|s| s.trim().parse::<i64>().ok());
    let correct = given == Some(i64::from(expected));
    let reaction = exclamation(correct, turn.rng);
    let mut prompt = turn.render(TemplateKey::AnswerResponse, &[reaction])?;

    let index = session.record_answer(correct);
    debug!(index, correct, score = session.score(), "answer graded");
    if index == session.midpoint() {
        prompt.push_str(&turn.text(TemplateKey::HalfwayMessage)?);
    }

    match session.current_question() {
        Some(spoken) => {
            let question = turn.question(spoken)?;
            prompt.push_str(&question);
            Ok(SkillResponse::ask_with_reprompt(prompt, question))
        }
        None => {
            let score = session.score().to_string();
            let count = session.problems().len().to_string();
            prompt.push_str(&turn.render(TemplateKey::GameOver, &[&score, &count])?);
            let play_again = turn.text(TemplateKey::PlayAgainPrompt)?;
            prompt.push_str(&play_again);
            Ok(SkillResponse::ask_with_reprompt(prompt, play_again))
        }
    }
}

fn on_yes(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    if !session.is_finished() {
        return on_repeat(turn, session, event);
    }
    session.reset();
    setup::enter(turn)
}

fn on_repeat(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    _event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    Ok(SkillResponse::ask(current_prompt(turn, session)?))
}

fn on_help(
    turn: &mut Turn<'_>,
    session: &mut QuizSession,
    _event: &IntentEvent,
) -> SkillResult<SkillResponse> {
    let prompt = current_prompt(turn, session)?;
    let help = turn.text(TemplateKey::Help)? + &prompt;
    Ok(SkillResponse::ask_with_reprompt(help, prompt))
}

/// The question awaiting an answer, or the play-again offer once the quiz
/// is over.
fn current_prompt(turn: &Turn<'_>, session: &QuizSession) -> SkillResult<String> {
    match session.current_question() {
        Some(spoken) => turn.question(spoken),
        None => turn.text(TemplateKey::PlayAgainPrompt),
    }
}
