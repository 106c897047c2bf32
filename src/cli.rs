use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for the rendered event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// The command line wins over the config file.
    pub fn resolve(user_choice: Option<OutputFormat>, configured: OutputFormat) -> OutputFormat {
        user_choice.unwrap_or(configured)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "evtemit",
    about = "Build a demo event and print it as structured text",
    version = env!("CARGO_PKG_VERSION"),
    after_help = "Logs are written to stderr. Set RUST_LOG to override the configured level."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to evtemit.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    /// Output format (default: json, or whatever the config file says)
    #[arg(long, short = 'o', value_enum)]
    pub format: Option<OutputFormat>,
}
