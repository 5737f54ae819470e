// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static proxy configuration.
//!
//! Configuration is read from a TOML file and includes:
//! - `log_level`: Verbosity of the proxy's own log
//! - `default_entry_points`: Entry points used by routes that name none
//! - `entry_points`: Named listeners (e.g., `http` → `:80`)
//! - `providers`: Sources of dynamic routing configuration
//!
//! Nothing here is validated beyond what TOML parsing enforces.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "portico.toml";
const CONFIG_DIR_NAME: &str = "portico";

/// Static configuration loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level of the proxy (debug, info, warn, error).
    pub log_level: String,
    /// Entry points attached to routes that do not name their own.
    pub default_entry_points: Vec<String>,
    /// Named listeners.
    pub entry_points: BTreeMap<String, EntryPoint>,
    /// Dynamic configuration providers.
    pub providers: Providers,
}

/// A listening address, optionally terminating TLS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    /// Listen address, e.g. `:80` or `127.0.0.1:8080`.
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TlsConfig {
    pub cert_file: String,
    pub key_file: String,
}

/// Configured providers. Absent providers are disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Providers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerProvider>,
}

/// Routes read from a file on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileProvider {
    pub filename: String,
    /// Reload when the file changes.
    #[serde(default)]
    pub watch: bool,
}

/// Routes derived from container labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockerProvider {
    #[serde(default = "default_docker_endpoint")]
    pub endpoint: String,
    /// Default domain for generated host rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default = "default_true")]
    pub watch: bool,
}

fn default_docker_endpoint() -> String {
    "unix:///var/run/docker.sock".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let mut entry_points = BTreeMap::new();
        entry_points.insert(
            "http".to_string(),
            EntryPoint {
                address: ":80".to_string(),
                tls: None,
            },
        );
        Config {
            log_level: "error".to_string(),
            default_entry_points: vec!["http".to_string()],
            entry_points,
            providers: Providers::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Loads configuration from the first available source.
    ///
    /// Order: `explicit` path, `PORTICO_CONFIG_FILE`, `./portico.toml`,
    /// `$XDG_CONFIG_HOME/portico/portico.toml`, then built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let sources = ConfigSources {
            explicit: explicit.map(Path::to_path_buf).or_else(env::config_file),
            cwd,
            config_home: env::config_home(),
        };
        match sources.resolve()? {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path.display());
                Self::load(&path)
            }
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Candidate locations for the configuration file.
#[derive(Debug, Clone)]
pub(crate) struct ConfigSources {
    /// Path named by flag or environment; must exist when present.
    pub explicit: Option<PathBuf>,
    pub cwd: PathBuf,
    pub config_home: Option<PathBuf>,
}

impl ConfigSources {
    /// Returns the file to load, or `None` when defaults apply.
    pub fn resolve(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.explicit {
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.clone()));
        }

        let local = self.cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Ok(Some(local));
        }

        if let Some(home) = &self.config_home {
            let user = home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if user.is_file() {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
