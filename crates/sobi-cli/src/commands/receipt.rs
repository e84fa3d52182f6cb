use chrono::NaiveDate;
use sobi_core::Receipt;

pub fn run(
    code: &str,
    referrer: Option<&str>,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<(), String> {
    let full = super::full_code_arg(code)?;
    let referrer = referrer.and_then(super::resolve_referrer);
    let receipt = Receipt::new(full.main, full.sub, referrer, super::today_or(date));

    if json {
        let out = serde_json::to_string_pretty(&receipt)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        println!("{receipt}");
    }

    Ok(())
}
