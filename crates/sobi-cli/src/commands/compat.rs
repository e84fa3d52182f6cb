use sobi_core::compat::compat_key;
use sobi_core::{character, compat_comment};

pub fn run(a: &str, b: &str) -> Result<(), String> {
    let a = super::main_code_arg(a)?;
    let b = super::main_code_arg(b)?;
    tracing::debug!(key = %compat_key(a, b), "compat lookup");

    let (ca, cb) = (character(a), character(b));
    println!("  {} {}  ×  {} {}", ca.emoji, ca.name, cb.emoji, cb.name);
    println!("  \"{}\"", compat_comment(a, b));

    Ok(())
}
