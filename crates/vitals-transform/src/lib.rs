//! Row normalization for health-log imports.
//!
//! This crate turns decoded CSV rows into candidate records keyed by
//! canonical field names:
//!
//! - **normalization**: header aliases, cell coercion, dates and lab results
//! - **normalize**: the per-entity normalization pipeline

pub mod normalization;
pub mod normalize;

pub use normalization::datetime;
pub use normalize::{coerce_record, normalize};
