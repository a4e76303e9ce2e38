//! Path utilities for mistrz.
//!
//! User-level settings live under `~/.mistrz/`:
//! - `~/.mistrz/config.toml` - optional configuration
//!
//! The event store defaults to `events.json` in the working directory so
//! every group of players can keep its own file.

use std::path::PathBuf;

/// Returns the mistrz home directory (`~/.mistrz/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mistrz")
}

/// Returns the default config file path (`~/.mistrz/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_mistrz_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".mistrz"));
    }
}
