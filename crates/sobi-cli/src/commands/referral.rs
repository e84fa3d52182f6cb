use sobi_core::RefPreview;

pub fn run(value: &str) -> Result<(), String> {
    let Some(code) = super::resolve_referrer(value) else {
        println!("  no referral");
        return Ok(());
    };

    let preview = RefPreview::new(code);
    let c = preview.character;
    println!("  referrer:   {} {} {}", c.code, c.emoji, c.name);
    println!("  score:      {}", preview.total_score);
    println!("  rarity:     100명 중 {}명 [{}]", c.rarity, c.badge);
    println!();
    println!("  {}", preview.challenge());

    Ok(())
}
