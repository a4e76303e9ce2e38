//! Application configuration loading and validation.
//!
//! Configuration is optional. Without a file every section takes its
//! default, which reproduces the classic behaviour: events in
//! `events.json` next to where the command runs, dates as `YYYY/MM/DD`.
//!
//! ```toml
//! [store]
//! path = "/home/ala/pingpong/events.json"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [display]
//! date_format = "%Y-%m-%d"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mistrz::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Event store location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the JSON event file.
    ///
    /// Defaults to "events.json" in the current directory.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("events.json"),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `strftime` pattern for the default event date.
    pub date_format: String,
}

impl DisplayConfig {
    /// Today's date rendered with [`DisplayConfig::date_format`].
    #[must_use]
    pub fn today(&self) -> String {
        Local::now().format(&self.date_format).to_string()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y/%m/%d".into(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Parse configuration from TOML content read from `path`.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            content: content.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadFile(e)
            }
        })?;
        Self::parse_toml(&content, path)
    }

    /// Load the configuration the CLI should run with.
    ///
    /// An explicitly requested file must exist. The default file is optional
    /// and its absence yields the defaults.
    #[allow(clippy::result_large_err)]
    pub fn resolve(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::load(default_path) {
            Err(crate::error::Error::Config(ConfigError::NotFound(_))) => {
                debug!(path = %default_path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.init(verbose);
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.display.date_format.is_empty()
            || StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(ConfigError::InvalidValue {
                field: "display.date_format",
                reason: format!("not a valid strftime pattern: \"{}\"", self.display.date_format),
            }
            .into());
        }
        self.logging.validate()
    }
}
