//! Mapping quiz answers to a result code.
//!
//! Answers arrive in question order `[SP, EI, NR, FL]`. The main code reads
//! positions 0, 2 and 3; position 1 is the sub-variant.

use serde::Serialize;

use crate::code::{EiAxis, FullCode, MainCode};
use crate::error::InvalidResultError;

/// Index of each axis in an answer sequence.
pub const SP_ANSWER: usize = 0;
/// Index of the sub-variant answer.
pub const EI_ANSWER: usize = 1;
/// Index of the gamble-vs-certain answer.
pub const NR_ANSWER: usize = 2;
/// Index of the leisure-vs-labor answer.
pub const FL_ANSWER: usize = 3;

/// A derived quiz result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// The archetype.
    pub main_code: MainCode,
    /// The sub-variant.
    pub sub_code: EiAxis,
}

impl QuizResult {
    /// The four-letter receipt number.
    pub fn full_code(&self) -> FullCode {
        FullCode::new(self.main_code, self.sub_code)
    }
}

/// Derive `(main code, sub code)` from answer tokens.
///
/// Only indices 0-3 are read. A missing answer contributes nothing to the
/// computed code, which then fails validation like any other bad token.
pub fn derive_result<S: AsRef<str>>(answers: &[S]) -> Result<QuizResult, InvalidResultError> {
    let token = |i: usize| answers.get(i).map_or("", AsRef::as_ref);

    let main = format!(
        "{}{}{}",
        token(SP_ANSWER),
        token(NR_ANSWER),
        token(FL_ANSWER)
    );
    let sub = token(EI_ANSWER);

    match (MainCode::parse(&main), EiAxis::parse(sub)) {
        (Some(main_code), Some(sub_code)) => Ok(QuizResult {
            main_code,
            sub_code,
        }),
        _ => Err(InvalidResultError {
            code: format!("{main}{sub}"),
        }),
    }
}
