//! Cell-level normalization primitives.
//!
//! - **aliases**: accepted header spellings per canonical field
//! - **datetime**: date parsing and ISO 8601 formatting
//! - **numeric**: number parsing and cell type coercion
//! - **result**: splitting combined "value + unit" lab results

pub mod aliases;
pub mod datetime;
pub mod numeric;
pub mod result;

pub use aliases::{FieldAlias, alias_groups, aliases_for, date_aliases};
pub use datetime::{format_iso8601_date, is_blank_date, normalize_date, parse_date};
pub use numeric::{coerce_cell, parse_number};
pub use result::{CombinedResult, split_combined_result};
