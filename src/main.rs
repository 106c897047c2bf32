use clap::Parser;
use eyre::{Context, Result};
use log::info;

mod cli;
mod config;
mod observability;

use cli::{Cli, OutputFormat};
use config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel, verbose: bool) {
    // stdout carries the event; logs go to stderr only
    let mut builder = env_logger::Builder::new();

    let level = if verbose { LogLevel::Debug } else { log_level };

    // RUST_LOG env var takes precedence, otherwise use config log_level
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        });
    }

    builder.target(env_logger::Target::Stderr).init();

    info!(
        "Log level: {} (from {})",
        level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() {
            "RUST_LOG env"
        } else if verbose {
            "--verbose"
        } else {
            "config"
        }
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    setup_logging(config.log_level, cli.verbose);

    info!("Starting evtemit with config from: {:?}", cli.config);

    let format = OutputFormat::resolve(cli.format, config.format);
    observability::emitter::run(format).context("Failed to emit event")?;

    Ok(())
}
