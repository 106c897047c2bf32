use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cli::OutputFormat;

/// Main evtemit configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub format: OutputFormat,
}

/// Log verbosity, written to stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Only an explicitly named file is read; otherwise defaults apply
    /// and no file is touched.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
