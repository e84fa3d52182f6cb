use colored::Colorize;
use sobi_core::{character, derive_result};

pub fn run(answers: &[String]) -> Result<(), String> {
    let tokens = split_answers(answers);
    let result = derive_result(tokens.as_slice()).map_err(|e| e.to_string())?;
    let full = result.full_code();
    tracing::debug!(answers = ?tokens, %full, "derived result");

    let c = character(result.main_code);
    println!("  {} {} {}", full.to_string().bold(), c.emoji, c.name);
    println!("  \"{}\"", c.title);

    Ok(())
}

/// A single four-letter argument is shorthand for four tokens.
fn split_answers(answers: &[String]) -> Vec<String> {
    match answers {
        [single] if single.chars().count() == 4 => {
            single.chars().map(String::from).collect()
        }
        _ => answers.to_vec(),
    }
}
