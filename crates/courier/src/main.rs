// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Courier - scheduled personalised email from a recipient sheet.
//!
//! This is the binary entry point.

mod check;
mod run;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use courier_config::CourierConfig;

/// Courier - scheduled personalised email from a recipient sheet.
#[derive(Parser, Debug)]
#[command(name = "courier", version, about, long_about = None)]
struct Cli {
    /// Load this config file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Send every row at its scheduled time, then report failures.
    Run {
        /// Recipient sheet (CSV). Overrides `source.path`.
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,
    },
    /// Validate every row and print the schedule without sending.
    Check {
        /// Recipient sheet (CSV). Overrides `source.path`.
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => courier_config::load_and_validate_path(path),
        None => courier_config::load_and_validate(),
    };
    let config: CourierConfig = match loaded {
        Ok(config) => config,
        Err(errors) => {
            courier_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let code = match cli.command {
        Commands::Run { source } => match run::run_dispatch(&config, source).await {
            Ok(summary) => run::exit_code(&summary),
            Err(e) => {
                eprintln!("courier: {e}");
                1
            }
        },
        Commands::Check { source } => match check::run_check(&config, source).await {
            Ok(report) => {
                print!("{}", report.render());
                i32::from(!report.all_valid())
            }
            Err(e) => {
                eprintln!("courier: {e}");
                1
            }
        },
    };
    std::process::exit(code);
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the config level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("courier={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
