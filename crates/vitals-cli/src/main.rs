//! Health log CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use vitals_cli::commands::{open_store, run_export, run_import, run_list, run_timeline};
use vitals_cli::logging::{LogConfig, init_logging};
use vitals_cli::summary::{
    print_export_summary, print_fields, print_import_summary, print_records, print_timeline,
};

mod cli;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let store = open_store(cli.store.as_deref());
    let result = match cli.command {
        Command::Import(args) => run_import(&store, &args.file, args.entity, args.dry_run)
            .map(|outcome| print_import_summary(&outcome)),
        Command::Export(args) => run_export(&store, args.entity, args.output.as_deref())
            .map(|outcome| print_export_summary(&outcome)),
        Command::List(args) => {
            run_list(&store, args.entity).map(|records| print_records(args.entity, &records))
        }
        Command::Timeline => run_timeline(&store).map(|events| print_timeline(&events)),
        Command::Fields(args) => {
            print_fields(args.entity);
            Ok(())
        }
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Logging config from the global flags. An explicit `--log-level` wins
/// over `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        ..LogConfig::default()
    }
}
