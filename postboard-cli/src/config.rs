//! Configuration loading: `.env` files and the TOML config file
//!
//! Resolution order for server settings (highest first):
//! 1. Command-line flags
//! 2. Environment variables (including those loaded from `.env`)
//! 3. `~/.postboard/config.toml` (or `--config <path>`)
//! 4. Built-in defaults

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Load environment variables from .env files
///
/// Checks the current directory first, then `~/.postboard/.env`.
/// Variables already set are never overwritten. Returns the files that
/// were loaded so the caller can log them once tracing is up.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

/// Get the postboard config directory path (~/.postboard)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".postboard"))
}

/// TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostboardConfig {
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

impl PostboardConfig {
    /// Default location: ~/.postboard/config.toml
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PostboardConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, PostboardConfig::default());
    }

    #[test]
    fn parses_server_section() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:8080\"\ncors_permissive = true\nrequest_timeout_secs = 5"
        )
        .unwrap();

        let config = PostboardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server.bind, Some("0.0.0.0:8080".parse().unwrap()));
        assert_eq!(config.server.cors_permissive, Some(true));
        assert_eq!(config.server.request_timeout_secs, Some(5));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = 42").unwrap();

        let err = PostboardConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
