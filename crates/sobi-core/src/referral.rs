//! Extracting a referrer's code from an untrusted `ref` value.

use crate::code::MainCode;

/// The referrer's main code, taken from the first three characters of `raw`.
///
/// Anything that does not start with a valid code yields `None`. Never panics,
/// including on multi-byte input.
pub fn parse_ref_code(raw: &str) -> Option<MainCode> {
    let end = raw.char_indices().nth(3).map_or(raw.len(), |(i, _)| i);
    MainCode::parse(&raw[..end])
}
