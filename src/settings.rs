//! Application configuration.
//!
//! Sources are layered lowest to highest: built-in defaults, the settings
//! file, then `DME_*` environment variables. Command-line overrides are
//! applied by the binary on top of the loaded [`Settings`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "appsettings";
pub const DEFAULT_NOTE_PATH: &str = "physician_note1.txt";
pub const DEFAULT_API_URL: &str = "https://alert-api.com/DrExtract";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variables and the settings keys they override.
const ENV_OVERRIDES: [(&str, &str); 4] = [
    ("DME_NOTE_PATH", "PhysicianNotePath"),
    ("DME_API_URL", "ApiUrl"),
    ("DME_TIMEOUT_SECS", "TimeoutSecs"),
    ("DME_LOG_LEVEL", "LogLevel"),
];

// Keys may come back lower-cased from the config layer, hence the aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(rename = "PhysicianNotePath", alias = "physiciannotepath")]
    pub physician_note_path: PathBuf,
    #[serde(rename = "ApiUrl", alias = "apiurl")]
    pub api_url: String,
    #[serde(rename = "TimeoutSecs", alias = "timeoutsecs")]
    pub timeout_secs: u64,
    #[serde(rename = "LogLevel", alias = "loglevel")]
    pub log_level: String,
}

impl Settings {
    /// Loads settings using the process environment.
    ///
    /// Without an explicit file, `appsettings.{json,toml}` in the working
    /// directory is used when present. An explicit file must exist.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(file, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(file: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .set_default("PhysicianNotePath", DEFAULT_NOTE_PATH)?
            .set_default("ApiUrl", DEFAULT_API_URL)?
            .set_default("TimeoutSecs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("LogLevel", DEFAULT_LOG_LEVEL)?;

        builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_SETTINGS_FILE).required(false)),
        };

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, env(var))?;
        }

        let source = file.map_or_else(|| DEFAULT_SETTINGS_FILE.to_string(), |p| p.display().to_string());
        builder
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("failed to load configuration from {source}"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
