//! Splitting of combined lab result cells ("5.4 mmol/L").

use std::sync::LazyLock;

use regex::Regex;

/// `<number><optional unit token>`: unsigned decimal, optional whitespace,
/// then letters, `/` or `%`. Negative numbers and exponents are not
/// recognized and fall through to free text.
static COMBINED_RESULT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*([A-Za-z/%]+)?$").expect("valid combined result regex")
});

/// Outcome of splitting a combined result cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CombinedResult {
    Numeric { value: f64, unit: Option<String> },
    Text(String),
}

/// Splits a combined result into value and unit, or keeps it as text.
pub fn split_combined_result(raw: &str) -> CombinedResult {
    let trimmed = raw.trim();
    let Some(captures) = COMBINED_RESULT_REGEX.captures(trimmed) else {
        return CombinedResult::Text(trimmed.to_string());
    };
    match captures[1].parse::<f64>() {
        Ok(value) => CombinedResult::Numeric {
            value,
            unit: captures.get(2).map(|unit| unit.as_str().to_string()),
        },
        Err(_) => CombinedResult::Text(trimmed.to_string()),
    }
}
