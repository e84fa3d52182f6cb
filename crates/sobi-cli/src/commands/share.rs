use sobi_core::share::{ShareCard, share_text, share_url};
use sobi_core::{SobiConfig, character};

pub fn run(code: &str, channel: &str, origin: &str) -> Result<(), String> {
    let full = super::full_code_arg(code)?;
    let config = SobiConfig::default().with_origin(origin);

    let url = share_url(&config, full, channel).map_err(|e| e.to_string())?;
    tracing::debug!(%full, channel, url, "built share link");

    let c = character(full.main);
    let card = ShareCard::for_character(c);
    println!("  url:   {url}");
    println!("  card:  {} / {}", card.title, card.description);
    println!("  text:  {}", share_text(c, &url));

    Ok(())
}
