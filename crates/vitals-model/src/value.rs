//! Untyped row representations that flow between decoding, normalization
//! and validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single loosely typed cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// True for anything other than null or blank text.
    pub fn is_populated(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Text rendering used for CSV cells and free-text coercion.
    ///
    /// Null renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::Number(value) => format_number(*value),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Formats a number in its shortest decimal form (`70.0` → `70`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{value}")
}

/// One decoded CSV row keyed by its (untrusted) header names.
///
/// `None` marks a cell the caller knows is null; rows shorter than the
/// header simply lack the trailing keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    cells: BTreeMap<String, Option<String>>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: Option<String>) {
        self.cells.insert(header.into(), value);
    }

    pub fn contains(&self, header: &str) -> bool {
        self.cells.contains_key(header)
    }

    /// Cell text, `None` when the key is absent or null.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).and_then(Option::as_deref)
    }

    /// True when the column exists and holds non-blank text.
    pub fn has_value(&self, header: &str) -> bool {
        self.get(header).is_some_and(|value| !value.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.cells
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (key, value) in iter {
            record.insert(key, Some(value.into()));
        }
        record
    }
}

/// Normalized but not yet validated record, keyed by canonical field names
/// (plus whatever unknown columns the source carried).
///
/// Cells read as numbers keep the text they were written with, so a text
/// field holding `"007"` still reads back as `"007"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRecord {
    fields: BTreeMap<String, FieldValue>,
    #[serde(skip)]
    written: BTreeMap<String, String>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// True when the field holds anything other than null or blank text.
    pub fn is_populated(&self, field: &str) -> bool {
        self.get(field).is_some_and(FieldValue::is_populated)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_f64)
    }

    /// Text the field was written with. Numbers read from a cell give the
    /// cell text back; other numbers render in their shortest form.
    pub fn written_text(&self, field: &str) -> Option<String> {
        if let Some(text) = self.written.get(field) {
            return Some(text.clone());
        }
        self.get(field)
            .filter(|value| !value.is_null())
            .map(FieldValue::render)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        let field = field.into();
        self.written.remove(&field);
        self.fields.insert(field, value.into());
    }

    /// Inserts a number parsed from `text`, keeping the text as written.
    pub fn insert_parsed(
        &mut self,
        field: impl Into<String>,
        value: f64,
        text: impl Into<String>,
    ) {
        let field = field.into();
        self.written.insert(field.clone(), text.into());
        self.fields.insert(field, FieldValue::Number(value));
    }

    /// Copies `from` onto `to`, written text included.
    pub fn copy_field(&mut self, from: &str, to: &str) {
        let Some(value) = self.get(from).cloned() else {
            return;
        };
        match self.written.get(from).cloned() {
            Some(text) => {
                self.written.insert(to.to_string(), text);
                self.fields.insert(to.to_string(), value);
            }
            None => self.insert(to, value),
        }
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.written.remove(field);
        self.fields.remove(field)
    }

    /// Overlays every field of `patch` onto this record.
    pub fn merge(&mut self, patch: CandidateRecord) {
        for field in patch.fields.keys() {
            self.written.remove(field);
        }
        self.fields.extend(patch.fields);
        self.written.extend(patch.written);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for CandidateRecord {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for CandidateRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = CandidateRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
