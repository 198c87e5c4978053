//! Numeric coercion of raw cell text.

use vitals_model::FieldValue;

/// Parses a cell as a finite number, requiring the whole (trimmed) text to
/// be consumed. Returns None for empty, partial (`"5 kg"`) or non-finite
/// (`"inf"`, `"NaN"`) input.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerces one raw cell: empty or missing → Null, numeric text → Number,
/// anything else is kept verbatim as Text.
pub fn coerce_cell(value: Option<&str>) -> FieldValue {
    match value {
        None | Some("") => FieldValue::Null,
        Some(text) => match parse_number(text) {
            Some(number) => FieldValue::Number(number),
            None => FieldValue::text(text),
        },
    }
}
