//! dump_taxdb - Main entry point

use clap::error::ErrorKind;
use clap::Parser;
use std::process;
use taxdb_common::logging::{init_logging, LogConfig, LogLevel};
use taxdb_dump::config::DumpConfig;
use taxdb_dump::{commands, Cli, USAGE};
use tracing::error;

fn main() {
    // Optional .env with LOG_* / TAXDB_DUMP_* settings
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{}", USAGE);
            eprintln!();
            eprint!("{}", e);
            process::exit(1);
        },
    };

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let log_config = LogConfig::builder()
        .level(level)
        .log_file_prefix("dump_taxdb")
        .build();

    // Environment variables take precedence over the flag
    let log_config = match LogConfig::from_env_over(log_config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring LOG_* settings: {}", e);
            log_config
        },
    };

    // The export works without logging
    let _ = init_logging(&log_config);

    if let Err(e) = execute(&cli) {
        error!(error = %e, "Export failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> taxdb_dump::Result<()> {
    let config = DumpConfig::from_env()?;
    commands::dump::run(&cli.taxdb, &cli.names, &cli.nodes, &config)?;
    Ok(())
}
