pub mod compat;
pub mod derive;
pub mod list;
pub mod og;
pub mod quiz;
pub mod receipt;
pub mod referral;
pub mod share;
pub mod show;

use chrono::{Local, NaiveDate};
use sobi_core::share::referrer_from_url;
use sobi_core::{FullCode, MainCode, parse_ref_code};

/// Parse a main code argument, failing with a readable message.
fn main_code_arg(raw: &str) -> Result<MainCode, String> {
    MainCode::parse(raw).ok_or_else(|| {
        format!(
            "unknown main code: \"{raw}\" (expected one of {})",
            code_list()
        )
    })
}

/// Parse a full code argument such as `SNFE`.
fn full_code_arg(raw: &str) -> Result<FullCode, String> {
    FullCode::parse(raw).ok_or_else(|| {
        format!("unknown full code: \"{raw}\" (expected a main code followed by E or I)")
    })
}

/// Resolve an untrusted referral value: a share URL or a bare `ref` value.
///
/// A value that looks like a URL but carries no usable `ref` parameter is
/// read as a bare value, whose first three characters decide. Never fails;
/// anything unrecognized means "no referral".
fn resolve_referrer(raw: &str) -> Option<MainCode> {
    let from_url = if raw.contains('?') || raw.contains("://") {
        referrer_from_url(raw)
    } else {
        None
    };
    let code = from_url.or_else(|| parse_ref_code(raw));
    match code {
        Some(code) => tracing::debug!(raw, %code, "referral recognized"),
        None => tracing::debug!(raw, "referral ignored"),
    }
    code
}

fn code_list() -> String {
    MainCode::all()
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
