use serde_json::json;

use mw_skill::{AttributeStore, IntentEvent, MathQuizSkill, SkillConfig};

pub fn run(event: &str, attributes: &str, seed: Option<u64>) -> Result<(), String> {
    let event: IntentEvent =
        serde_json::from_str(event).map_err(|e| format!("invalid event: {e}"))?;
    let mut store =
        AttributeStore::from_json(attributes).map_err(|e| format!("invalid attributes: {e}"))?;

    let mut config = SkillConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut skill = MathQuizSkill::new(config);

    let response = skill
        .handle_turn(&mut store, &event)
        .map_err(|e| e.to_string())?;

    let out = json!({
        "response": response,
        "attributes": store,
    });
    let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}
