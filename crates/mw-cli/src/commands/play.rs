use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::debug;

use mw_skill::{
    Intent, IntentEvent, MathQuizSkill, QuizSession, SkillConfig, SkillResponse, TemplateRegistry,
};

pub fn run(seed: Option<u64>, locale_file: Option<&Path>) -> Result<(), String> {
    let mut config = SkillConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = locale_file {
        config = config.with_templates(load_templates(path)?);
    }

    let mut skill = MathQuizSkill::new(config);
    let mut session = QuizSession::new();
    debug!(?seed, locale = skill.templates().locale(), "starting play session");

    println!("  {} Math Wiz", "Starting".bold());
    println!("  Answer out loud... or type. 'quit' to exit.\n");

    let response = turn(&mut skill, &mut session, &IntentEvent::new(Intent::Launch))?;
    if !response.keep_session_open {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        let event = match reader.read_line(&mut line) {
            Ok(0) => IntentEvent::new(Intent::SessionEnded),
            Err(e) => return Err(e.to_string()),
            _ => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                parse_utterance(input)
            }
        };

        let response = turn(&mut skill, &mut session, &event)?;
        if !response.keep_session_open {
            break;
        }
    }

    Ok(())
}

fn turn(
    skill: &mut MathQuizSkill,
    session: &mut QuizSession,
    event: &IntentEvent,
) -> Result<SkillResponse, String> {
    let response = skill.handle(session, event).map_err(|e| e.to_string())?;
    println!("{}\n", strip_ssml(&response.prompt_text).trim_end().cyan());
    Ok(response)
}

fn load_templates(path: &Path) -> Result<TemplateRegistry, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let locale = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("custom");
    TemplateRegistry::from_json(locale, &json).map_err(|e| e.to_string())
}

/// Map a typed line to the intent a voice platform would have produced.
fn parse_utterance(input: &str) -> IntentEvent {
    match input.to_lowercase().as_str() {
        "yes" | "y" | "yeah" | "sure" => IntentEvent::new(Intent::Yes),
        "no" | "n" | "nope" => IntentEvent::new(Intent::No),
        "repeat" | "again" | "what" => IntentEvent::new(Intent::Repeat),
        "help" | "?" => IntentEvent::new(Intent::Help),
        "stop" => IntentEvent::new(Intent::Stop),
        "cancel" => IntentEvent::new(Intent::Cancel),
        "quit" | "q" | "exit" => IntentEvent::new(Intent::SessionEnded),
        _ => IntentEvent::response(input),
    }
}

/// Drop speech markup tags, keeping their text.
fn strip_ssml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utterances() {
        assert_eq!(parse_utterance("Yes").intent(), Intent::Yes);
        assert_eq!(parse_utterance("no").intent(), Intent::No);
        assert_eq!(parse_utterance("repeat").intent(), Intent::Repeat);
        assert_eq!(parse_utterance("quit").intent(), Intent::SessionEnded);
        let event = parse_utterance("42");
        assert_eq!(event.intent(), Intent::Response);
        assert_eq!(event.slot(), Some("42"));
    }

    #[test]
    fn ssml_is_stripped() {
        assert_eq!(
            strip_ssml("<say-as interpret-as='interjection'>Bingo!</say-as> What is 1 plus 1? "),
            "Bingo! What is 1 plus 1? "
        );
        assert_eq!(strip_ssml("plain"), "plain");
    }
}
