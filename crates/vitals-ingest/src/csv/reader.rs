//! CSV decoding into raw records.

use std::collections::HashSet;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};
use vitals_model::RawRecord;

use crate::error::{DecodeError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Rejects UTF-16 input by its byte-order mark.
pub fn validate_encoding(bytes: &[u8]) -> Result<()> {
    match bytes.get(..2) {
        Some([0xFF, 0xFE]) => Err(DecodeError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
        }),
        Some([0xFE, 0xFF]) => Err(DecodeError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
        }),
        _ => Ok(()),
    }
}

/// Decodes CSV bytes into one raw record per data row.
///
/// - the first row is the header; names are trimmed and a UTF-8 BOM is
///   stripped
/// - rows whose cells are all blank are skipped
/// - a short row leaves the trailing headers out of its record
/// - cells beyond the header are ignored
/// - a repeated header name keeps its first column
pub fn decode(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    validate_encoding(bytes)?;
    let text = std::str::from_utf8(bytes).map_err(|source| DecodeError::InvalidUtf8 {
        offset: source.valid_up_to(),
        source,
    })?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = column_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (row_number, result) in reader.records().enumerate() {
        let row = result?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            debug!(row = row_number + 1, "skipping blank row");
            continue;
        }
        if row.len() > headers.len() {
            debug!(
                row = row_number + 1,
                extra = row.len() - headers.len(),
                "ignoring cells beyond the header"
            );
        }
        let mut record = RawRecord::new();
        for (index, header) in headers.iter().enumerate() {
            let Some(name) = header else {
                continue;
            };
            if let Some(cell) = row.get(index) {
                record.insert(name.as_str(), Some(cell.to_string()));
            }
        }
        records.push(record);
    }

    debug!(rows = records.len(), columns = headers.len(), "decoded CSV");
    Ok(records)
}

/// Header names by column position. `None` marks a blank or repeated
/// name whose cells are dropped.
fn column_headers(row: &csv::StringRecord) -> Result<Vec<Option<String>>> {
    let mut seen = HashSet::new();
    let headers: Vec<Option<String>> = row
        .iter()
        .map(|name| name.trim_matches(UTF8_BOM).trim())
        .map(|name| {
            if name.is_empty() {
                None
            } else if !seen.insert(name.to_string()) {
                warn!(column = name, "duplicate header, keeping the first column");
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect();

    if headers.iter().all(Option::is_none) {
        return Err(DecodeError::MissingHeader);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let records = decode(b"Date,Weight (kg)\n2025-09-01,70.5\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Date"), Some("2025-09-01"));
        assert_eq!(records[0].get("Weight (kg)"), Some("70.5"));
    }

    #[test]
    fn test_bom_and_header_whitespace() {
        let records = decode("\u{feff} Date , Feelings\n2025-09-01, fine\n".as_bytes()).unwrap();
        assert_eq!(records[0].get("Date"), Some("2025-09-01"));
        // Cell values are not trimmed.
        assert_eq!(records[0].get("Feelings"), Some(" fine"));
    }

    #[test]
    fn test_blank_rows_skipped() {
        let records = decode(b"a,b\n1,2\n,\n  ,  \n3,4\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("a"), Some("3"));
    }

    #[test]
    fn test_short_and_long_rows() {
        let records = decode(b"a,b,c\n1\n1,2,3,4\n").unwrap();
        assert!(records[0].contains("a"));
        assert!(!records[0].contains("b"));
        assert_eq!(records[1].len(), 3);
    }

    #[test]
    fn test_duplicate_header_keeps_first() {
        let records = decode(b"Date,Date\n2025-09-01,2024-01-01\n").unwrap();
        assert_eq!(records[0].get("Date"), Some("2025-09-01"));
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn test_header_only() {
        assert!(decode(b"Date,Notes\n").unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_input() {
        assert!(matches!(decode(b""), Err(DecodeError::MissingHeader)));
        assert!(matches!(decode(b" , \n1,2\n"), Err(DecodeError::MissingHeader)));
        assert!(matches!(
            decode(&[0xFF, 0xFE, b'a', 0]),
            Err(DecodeError::UnsupportedEncoding { .. })
        ));
        assert!(matches!(
            decode(b"a,b\n\xC3\x28,1\n"),
            Err(DecodeError::InvalidUtf8 { offset: 4, .. })
        ));
    }
}
