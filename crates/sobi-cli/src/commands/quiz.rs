use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use colored::Colorize;
use sobi_core::catalog::LOADING_TEXTS;
use sobi_core::quiz::{Phase, Question, Step};
use sobi_core::{Choice, QUESTIONS, QuizSession, Receipt, RefPreview};

pub fn run(referrer: Option<&str>, date: Option<NaiveDate>) -> Result<(), String> {
    let referrer = referrer.and_then(super::resolve_referrer);
    let mut session = QuizSession::new(referrer);

    if let Phase::RefPreview { referrer } = session.phase() {
        let preview = RefPreview::new(*referrer);
        let c = preview.character;
        println!("  친구의 소비 캐릭터");
        println!("  {} {}", c.emoji, c.name.bold());
        println!("  {}", c.title);
        println!("  {}\n", preview.challenge());
        session.start().map_err(|e| e.to_string())?;
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    let mut index = 0;
    let result = loop {
        let Some(question) = session.current_question() else {
            return Err("quiz ended without a result".into());
        };
        print_question(index, question);

        let choice = loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => return Err("quiz aborted before the last answer".into()),
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            match Choice::parse(&line) {
                Some(choice) => break choice,
                None => println!("{}", "  answer a or b".yellow()),
            }
        };

        println!("  {}\n", question.crowd_hint(choice));
        tracing::debug!(question = question.id, %choice, "answered");

        match session.answer(choice).map_err(|e| e.to_string())? {
            Step::Next(next) => index = next,
            Step::Done(result) => break result,
        }
    };

    for text in LOADING_TEXTS {
        println!("  {}", text.dimmed());
    }
    println!();

    let receipt = Receipt::new(
        result.main_code,
        result.sub_code,
        session.referrer(),
        super::today_or(date),
    );
    println!("{receipt}");

    Ok(())
}

fn print_question(index: usize, question: &Question) {
    println!("  {} {}/{}", "Q".bold(), index + 1, QUESTIONS.len());
    for line in question.text.lines() {
        println!("  {}", line.bold());
    }
    println!("  [A] {} {}", question.a.emoji, question.a.text);
    println!("  [B] {} {}", question.b.emoji, question.b.text);
}
