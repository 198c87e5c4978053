//! Raw row → candidate record.
//!
//! Steps, in order:
//!
//! 1. coerce every cell (empty → null, numeric → number, else text)
//! 2. resolve header aliases onto canonical fields
//! 3. normalize the primary date and the secondary date fields
//! 4. lab inference (procedure category, combined result, result text)
//! 5. `entry_date` fallbacks and schema defaults (meal, weight unit)
//!
//! Normalization never fails: anything it cannot interpret is passed
//! through for the validator to judge. Enumerated values are left as
//! written, so `"Active"` reaches the validator unchanged.

use tracing::{debug, trace};

use vitals_model::{CandidateRecord, EntitySchema, EntityType, FieldValue, RawRecord, schema_for};

use crate::normalization::aliases::{
    PROCEDURE_MARKERS, RESULT_TEXT_ALIASES, RESULT_TYPE_ALIASES, TEST_RESULT_COLUMN,
    alias_groups, date_aliases,
};
use crate::normalization::datetime::{normalize_date, parse_date};
use crate::normalization::numeric::coerce_cell;
use crate::normalization::result::{CombinedResult, split_combined_result};

/// Fallback sources for a missing `entry_date`, by priority.
const ENTRY_DATE_FALLBACKS: &[&str] = &["start_date", "diagnosis_date"];

/// Normalizes one raw row into a candidate for `entity`'s schema.
pub fn normalize(entity: EntityType, raw: &RawRecord) -> CandidateRecord {
    let schema = schema_for(entity);
    let mut output = coerce_record(raw);
    resolve_aliases(entity, &schema, &mut output);
    normalize_dates(entity, &schema, &mut output);
    if entity == EntityType::LabTest {
        infer_lab_fields(raw, &mut output);
    }
    apply_fallbacks(entity, &schema, &mut output);
    output
}

/// Step 1: per-cell type coercion, keeping every column. Numeric cells
/// keep their text as written.
pub fn coerce_record(raw: &RawRecord) -> CandidateRecord {
    let mut output = CandidateRecord::new();
    for (key, value) in raw.iter() {
        match (coerce_cell(value), value) {
            (FieldValue::Number(number), Some(text)) => output.insert_parsed(key, number, text),
            (coerced, _) => output.insert(key, coerced),
        }
    }
    output
}

/// First alias column holding a value.
fn pick<'a>(output: &'a CandidateRecord, keys: &[&str]) -> Option<&'a FieldValue> {
    pick_key(output, keys).and_then(|key| output.get(key))
}

fn pick_key<'k>(output: &CandidateRecord, keys: &[&'k str]) -> Option<&'k str> {
    keys.iter().copied().find(|key| output.is_populated(key))
}

fn resolve_aliases(entity: EntityType, schema: &EntitySchema, output: &mut CandidateRecord) {
    for group in alias_groups(entity) {
        if !schema.declares(group.field) || output.is_populated(group.field) {
            continue;
        }
        if let Some(alias) = pick_key(output, group.aliases) {
            trace!(entity = %entity, field = group.field, "resolved field from alias column");
            output.copy_field(alias, group.field);
        }
    }
}

fn normalize_dates(entity: EntityType, schema: &EntitySchema, output: &mut CandidateRecord) {
    let primary = entity.date_field();
    let source = pick_key(output, date_aliases(entity))
        .or_else(|| pick_key(output, &[primary, "start_date"]))
        .and_then(|key| output.written_text(key));
    if let Some(raw) = source {
        match normalize_date(&raw) {
            Some(date) => {
                if parse_date(&raw).is_none() {
                    debug!(entity = %entity, field = primary, "unrecognized date format, keeping raw value");
                }
                output.insert(primary, date);
            }
            None => {
                output.insert(primary, FieldValue::Null);
            }
        }
    }

    for spec in schema.fields {
        if !spec.is_date() || spec.name == primary {
            continue;
        }
        let Some(raw) = output.written_text(spec.name) else {
            continue;
        };
        let normalized = normalize_date(&raw).map_or(FieldValue::Null, FieldValue::from);
        output.insert(spec.name, normalized);
    }
}

fn infer_lab_fields(raw: &RawRecord, output: &mut CandidateRecord) {
    if PROCEDURE_MARKERS.iter().any(|column| raw.has_value(column))
        && !output.is_populated("category")
    {
        output.insert("category", "procedure");
    }

    let combined = Some(TEST_RESULT_COLUMN)
        .filter(|column| output.is_populated(column))
        .and_then(|column| output.written_text(column));
    if let Some(combined) = combined
        && !output.is_populated("value")
        && !output.is_populated("result_text")
    {
        match split_combined_result(&combined) {
            CombinedResult::Numeric { value, unit } => {
                output.insert("value", value);
                if let Some(unit) = unit
                    && !output.is_populated("unit")
                {
                    output.insert("unit", unit);
                }
            }
            CombinedResult::Text(text) => output.insert("result_text", text),
        }
    }

    let text_result = pick(output, RESULT_TYPE_ALIASES)
        .is_some_and(|kind| kind.render().to_lowercase().contains("text"));
    let has_numeric_value = output.number("value").is_some();
    if (text_result || !has_numeric_value)
        && !output.is_populated("result_text")
        && let Some(alias) = pick_key(output, RESULT_TEXT_ALIASES)
    {
        output.copy_field(alias, "result_text");
    }
}

fn apply_fallbacks(entity: EntityType, schema: &EntitySchema, output: &mut CandidateRecord) {
    if entity.date_field() == "entry_date"
        && !output.is_populated("entry_date")
        && let Some(source) = pick_key(output, ENTRY_DATE_FALLBACKS)
    {
        output.copy_field(source, "entry_date");
    }
    for spec in schema.fields {
        if let Some(default) = spec.default
            && !output.is_populated(spec.name)
        {
            output.insert(spec.name, default);
        }
    }
}
