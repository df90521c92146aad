#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! humctl — manage Humanitec applications from the command line.

mod api;
mod cli;
mod commands;
mod config;
mod types;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use api::HttpClient;
use cli::{Cli, OutputFormat, write_error};
use commands::CommandError;
use config::Config;
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are "errors" that go to stdout.
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            // No config to fall back on: honour --output alone.
            let format = commands::requested_format(cli.command.common().output.as_deref(), None)
                .unwrap_or(OutputFormat::Table);
            write_error(&ErrorOutput::new("config_error", format!("{err:#}")), format);
            std::process::exit(CommandError::EXIT_CODE);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = commands::dispatch(&cli.command, &config, HttpClient::new, &mut stdout) {
        tracing::debug!(error = ?err, "command failed");
        write_error(
            &ErrorOutput::from_command_error(&err),
            commands::error_format(&cli.command, &config),
        );
        std::process::exit(CommandError::EXIT_CODE);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let (path, explicit) = cli.config_path();
    let config = Config::load(&path, explicit).context("failed to load config")?;
    Ok(config.with_env(|key| std::env::var(key).ok()))
}
