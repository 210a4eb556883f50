use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use serde_json::json;

use mw_core::{Level, generate};

pub fn run(level: i64, count: usize, seed: Option<u64>, as_json: bool) -> Result<(), String> {
    let level = Level::try_from(level).map_err(|e| e.to_string())?;
    let mut rng = super::rng_from(seed);
    let problems = generate(level, count, &mut rng).map_err(|e| e.to_string())?;

    if as_json {
        let rows: Vec<_> = problems
            .iter()
            .map(|p| {
                json!({
                    "problem": p,
                    "answer": p.answer(),
                    "spoken": p.spoken(),
                })
            })
            .collect();
        let out = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Problem", "Answer"]);

    for (i, p) in problems.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(p.spoken()),
            Cell::new(p.answer()),
        ]);
    }

    println!("{table}");
    println!("  {} problem(s), level {level}", problems.len());
    Ok(())
}
