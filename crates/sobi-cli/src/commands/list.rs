use comfy_table::{ContentArrangement, Table};
use sobi_core::characters;

pub fn run(json: bool) -> Result<(), String> {
    if json {
        let all: Vec<_> = characters().collect();
        let out = serde_json::to_string_pretty(&all)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "", "Name", "Rarity", "Badge", "Score"]);

    for c in characters() {
        table.add_row(vec![
            c.code.to_string(),
            c.emoji.to_string(),
            c.name.to_string(),
            format!("{}%", c.rarity),
            c.badge.to_string(),
            c.total_score().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", characters().count());

    Ok(())
}
