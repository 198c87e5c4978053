//! Log output of a real import, captured in memory.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing::level_filters::LevelFilter;
use vitals_cli::commands::{open_store, run_import};
use vitals_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, init_logging_with_writer};
use vitals_model::EntityType;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// One test per binary: the subscriber is global.
#[test]
fn test_row_values_are_redacted() {
    let captured = Captured::default();
    let writer = captured.clone();
    let config = LogConfig::default()
        .with_level(LevelFilter::TRACE)
        .with_format(LogFormat::Json)
        .with_ansi(false)
        .with_log_data(false);
    init_logging_with_writer(&config, move || writer.clone());

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("symptoms.csv");
    std::fs::write(&file, "Date,Feelings\n2025-09-01,tired\n").unwrap();
    let store = open_store(Some(dir.path().join("store").as_path()));
    run_import(&store, &file, EntityType::Symptom, false).unwrap();

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("import command complete"));
    assert!(output.contains("bulk insert complete"));
    assert!(output.contains(REDACTED_VALUE));
    assert!(!output.contains("2025-09-01"));
    assert!(!output.contains("tired"));
}
