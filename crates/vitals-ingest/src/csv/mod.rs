//! CSV reading and writing.

mod reader;
mod writer;

pub use reader::{decode, validate_encoding};
pub use writer::{export_file_name, export_records};
