use colored::Colorize;
use sobi_core::{Character, character};

pub fn run(code: &str, json: bool) -> Result<(), String> {
    let code = super::main_code_arg(code)?;
    let c = character(code);

    if json {
        let out = serde_json::to_string_pretty(c)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    print_character(c);
    Ok(())
}

fn print_character(c: &Character) {
    println!(
        "  {} {} [{}]",
        c.emoji,
        c.name.bold(),
        c.code.to_string().dimmed()
    );
    println!("  \"{}\"", c.title);
    println!();
    println!("  {}", c.description);
    println!();
    println!("  plan:       {}", c.stats.plan);
    println!("  invest:     {}", c.stats.invest);
    println!("  yolo:       {}", c.stats.yolo);
    println!("  total:      {}", c.total_score().to_string().bold());
    println!("  rarity:     {}% [{}]", c.rarity, c.badge);

    let best = character(c.matches.best);
    let worst = character(c.matches.worst);
    println!();
    println!("  best match:  {} {} ({})", best.emoji, best.name, best.code);
    println!("  worst match: {} {} ({})", worst.emoji, worst.name, worst.code);
}
