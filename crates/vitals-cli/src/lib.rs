//! Command-line front end for the health log.

pub mod commands;
pub mod logging;
pub mod summary;
