//! Configuration loading and parsing.
//!
//! Parses `etch.toml` (or an override path provided by the binary). The only
//! setting so far is the log file destination under `[log]`; unknown fields
//! are tolerated so the format can grow without breaking older files.
//! Missing or unparseable files fall back to defaults rather than failing
//! startup.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_LOG_FILE: &str = "etch.log";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LogConfig {
    /// Destination for the tracing file appender.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Original file string (optional, kept for diagnostics).
    pub raw: Option<String>,
    /// Parsed (or default) data.
    pub file: ConfigFile,
}

impl Config {
    /// Effective log file path, defaulting to `etch.log` in the working
    /// directory.
    pub fn log_file(&self) -> PathBuf {
        self.file
            .log
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Best-effort config path: prefer a local `etch.toml`, then the platform
/// config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("etch.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("etch").join("etch.toml");
    }
    PathBuf::from("etch.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                debug!(target: "config", path = %path.display(), "config_loaded");
                Ok(Config {
                    raw: Some(content),
                    file,
                })
            }
            Err(_e) => {
                // Fall back to defaults on parse error rather than aborting.
                debug!(target: "config", path = %path.display(), "config_parse_error_defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}
