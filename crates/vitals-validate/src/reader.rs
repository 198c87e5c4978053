//! Typed access to candidate record fields.
//!
//! Every accessor returns the first problem as a [`ValidationError`] naming
//! the field, so entity validators can read fields in declaration order and
//! bail out with `?`.

use std::str::FromStr;

use uuid::Uuid;
use vitals_model::{
    CandidateRecord, FieldValue, NumberConstraint, RecordMeta, Result, ValidationError,
    ValidationReason, format_number,
};

/// Read-only view over a candidate record.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    record: &'a CandidateRecord,
}

impl<'a> FieldReader<'a> {
    pub fn new(record: &'a CandidateRecord) -> Self {
        Self { record }
    }

    /// The field's value, treating null and blank text as absent.
    fn present(&self, field: &str) -> Option<&'a FieldValue> {
        self.record.get(field).filter(|value| value.is_populated())
    }

    fn missing_reason(&self, field: &str) -> ValidationReason {
        match self.record.get(field) {
            Some(FieldValue::Text(_)) => ValidationReason::Empty,
            _ => ValidationReason::Missing,
        }
    }

    pub fn required_text(&self, field: &str) -> Result<String> {
        match self.present(field) {
            Some(value) => self.as_text(field, value),
            None => Err(ValidationError::new(field, self.missing_reason(field))),
        }
    }

    pub fn optional_text(&self, field: &str) -> Result<Option<String>> {
        self.present(field)
            .map(|value| self.as_text(field, value))
            .transpose()
    }

    pub fn text_or_default(&self, field: &str, default: &str) -> Result<String> {
        Ok(self
            .optional_text(field)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Dates are carried as text: `YYYY-MM-DD` when the normalizer could
    /// parse them, otherwise the value as written.
    pub fn required_date(&self, field: &str) -> Result<String> {
        self.required_text(field)
    }

    pub fn optional_date(&self, field: &str) -> Result<Option<String>> {
        self.optional_text(field)
    }

    pub fn optional_number(
        &self,
        field: &str,
        constraint: NumberConstraint,
    ) -> Result<Option<f64>> {
        let Some(value) = self.present(field) else {
            return Ok(None);
        };
        let number = match value {
            FieldValue::Number(number) => *number,
            FieldValue::Text(text) => parse_finite(text).ok_or_else(|| {
                ValidationError::new(
                    field,
                    ValidationReason::NotANumber {
                        found: text.clone(),
                    },
                )
            })?,
            other => {
                return Err(ValidationError::new(
                    field,
                    ValidationReason::NotANumber {
                        found: other.render(),
                    },
                ));
            }
        };
        check_constraint(field, number, constraint)?;
        Ok(Some(number))
    }

    /// Enumerated field that must be present.
    pub fn required_enum<T: FromStr>(
        &self,
        field: &str,
        allowed: &'static [&'static str],
    ) -> Result<T> {
        match self.present(field) {
            Some(value) => parse_enum(field, value, allowed),
            None => Err(ValidationError::new(field, self.missing_reason(field))),
        }
    }

    /// Enumerated field with a default for absent values. An explicit value
    /// outside `allowed` is still an error.
    pub fn enum_or_default<T: FromStr>(
        &self,
        field: &str,
        allowed: &'static [&'static str],
        default: T,
    ) -> Result<T> {
        match self.present(field) {
            Some(value) => parse_enum(field, value, allowed),
            None => Ok(default),
        }
    }

    /// Accepts booleans, `true/false/yes/no` in any case, and 1/0.
    pub fn optional_bool(&self, field: &str) -> Result<Option<bool>> {
        let Some(value) = self.present(field) else {
            return Ok(None);
        };
        let parsed = match value {
            FieldValue::Bool(flag) => Some(*flag),
            FieldValue::Number(number) if *number == 1.0 => Some(true),
            FieldValue::Number(number) if *number == 0.0 => Some(false),
            FieldValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        };
        parsed.map(Some).ok_or_else(|| {
            ValidationError::new(
                field,
                ValidationReason::NotABoolean {
                    found: value.render(),
                },
            )
        })
    }

    /// Record identity. Only `id` is read; timestamps are owned by the store.
    pub fn meta(&self) -> Result<RecordMeta> {
        let Some(value) = self.present("id") else {
            return Ok(RecordMeta::default());
        };
        let raw = value.render();
        let id = Uuid::parse_str(raw.trim()).map_err(|_| {
            ValidationError::new("id", ValidationReason::InvalidId { found: raw.clone() })
        })?;
        Ok(RecordMeta::with_id(id))
    }

    /// Numbers read from a cell give back the cell text as written.
    fn as_text(&self, field: &str, value: &FieldValue) -> Result<String> {
        match value {
            FieldValue::Text(text) => Ok(text.clone()),
            FieldValue::Number(number) => Ok(self
                .record
                .written_text(field)
                .unwrap_or_else(|| format_number(*number))),
            other => Err(ValidationError::new(
                field,
                ValidationReason::NotText {
                    found: other.render(),
                },
            )),
        }
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn check_constraint(field: &str, value: f64, constraint: NumberConstraint) -> Result<()> {
    let reason = match constraint {
        NumberConstraint::Positive if value <= 0.0 => ValidationReason::NotPositive { value },
        NumberConstraint::NonNegative if value < 0.0 => ValidationReason::Negative { value },
        _ => return Ok(()),
    };
    Err(ValidationError::new(field, reason))
}

fn parse_enum<T: FromStr>(
    field: &str,
    value: &FieldValue,
    allowed: &'static [&'static str],
) -> Result<T> {
    let text = value.render();
    text.parse::<T>().map_err(|_| {
        ValidationError::new(
            field,
            ValidationReason::NotAllowed {
                value: text.clone(),
                allowed,
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_model::Meal;

    fn record(fields: &[(&str, FieldValue)]) -> CandidateRecord {
        fields.iter().cloned().collect()
    }

    #[test]
    fn required_text_distinguishes_missing_and_empty() {
        let candidate = record(&[("blank", FieldValue::text("  ")), ("null", FieldValue::Null)]);
        let reader = FieldReader::new(&candidate);
        assert_eq!(
            reader.required_text("blank").unwrap_err().reason,
            ValidationReason::Empty
        );
        assert_eq!(
            reader.required_text("null").unwrap_err().reason,
            ValidationReason::Missing
        );
        assert_eq!(
            reader.required_text("absent").unwrap_err().reason,
            ValidationReason::Missing
        );
    }

    #[test]
    fn numbers_in_text_fields_render_shortest() {
        let candidate = record(&[("test_name", FieldValue::Number(25.0))]);
        let reader = FieldReader::new(&candidate);
        assert_eq!(reader.required_text("test_name").unwrap(), "25");
    }

    #[test]
    fn numbers_in_text_fields_keep_cell_text() {
        let mut candidate = CandidateRecord::new();
        candidate.insert_parsed("lab_name", 7.0, "007");
        candidate.insert_parsed("notes", 1.5, "1.50");
        let reader = FieldReader::new(&candidate);
        assert_eq!(reader.required_text("lab_name").unwrap(), "007");
        assert_eq!(reader.optional_text("notes").unwrap().as_deref(), Some("1.50"));
    }

    #[test]
    fn number_constraints() {
        let candidate = record(&[
            ("zero", FieldValue::Number(0.0)),
            ("negative", FieldValue::Number(-1.5)),
            ("text", FieldValue::text("12.5")),
            ("junk", FieldValue::text("heavy")),
        ]);
        let reader = FieldReader::new(&candidate);
        assert!(reader.optional_number("zero", NumberConstraint::Positive).is_err());
        assert_eq!(
            reader
                .optional_number("zero", NumberConstraint::NonNegative)
                .unwrap(),
            Some(0.0)
        );
        assert_eq!(
            reader
                .optional_number("negative", NumberConstraint::NonNegative)
                .unwrap_err()
                .reason,
            ValidationReason::Negative { value: -1.5 }
        );
        assert_eq!(
            reader.optional_number("text", NumberConstraint::Any).unwrap(),
            Some(12.5)
        );
        assert!(matches!(
            reader.optional_number("junk", NumberConstraint::Any).unwrap_err().reason,
            ValidationReason::NotANumber { .. }
        ));
        assert_eq!(
            reader.optional_number("absent", NumberConstraint::Positive).unwrap(),
            None
        );
    }

    #[test]
    fn enum_default_only_for_absent_values() {
        let candidate = record(&[("meal", FieldValue::Null), ("bad", FieldValue::text("brunch"))]);
        let reader = FieldReader::new(&candidate);
        assert_eq!(
            reader.enum_or_default("meal", Meal::VALUES, Meal::Other).unwrap(),
            Meal::Other
        );
        let err = reader
            .enum_or_default::<Meal>("bad", Meal::VALUES, Meal::Other)
            .unwrap_err();
        assert_eq!(err.field, "bad");
        assert!(matches!(err.reason, ValidationReason::NotAllowed { .. }));
    }

    #[test]
    fn booleans() {
        let candidate = record(&[
            ("a", FieldValue::text("Yes")),
            ("b", FieldValue::Number(0.0)),
            ("c", FieldValue::Bool(true)),
            ("d", FieldValue::text("maybe")),
        ]);
        let reader = FieldReader::new(&candidate);
        assert_eq!(reader.optional_bool("a").unwrap(), Some(true));
        assert_eq!(reader.optional_bool("b").unwrap(), Some(false));
        assert_eq!(reader.optional_bool("c").unwrap(), Some(true));
        assert!(reader.optional_bool("d").is_err());
        assert_eq!(reader.optional_bool("absent").unwrap(), None);
    }

    #[test]
    fn id_must_be_a_uuid() {
        let id = Uuid::new_v4();
        let candidate = record(&[("id", FieldValue::text(id.to_string()))]);
        assert_eq!(FieldReader::new(&candidate).meta().unwrap().id, Some(id));

        let candidate = record(&[("id", FieldValue::text("row-7"))]);
        let err = FieldReader::new(&candidate).meta().unwrap_err();
        assert_eq!(err.field, "id");
    }
}
