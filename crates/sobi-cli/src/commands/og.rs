use sobi_core::share::og_card;

pub fn run(code: &str, json: bool) -> Result<(), String> {
    let card = og_card(code);

    if json {
        let out = serde_json::to_string_pretty(&card)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} {}", card.emoji, card.heading);
    println!("  {}", card.subheading);
    println!("  background: {}", card.background);

    Ok(())
}
