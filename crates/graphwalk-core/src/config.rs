//! Configuration for graphwalk
//!
//! Looked up in order: an explicit path, `./graphwalk.toml`, then
//! `config.toml` under the user config directory (`~/.config/graphwalk`,
//! overridable with `GRAPHWALK_CONFIG_DIR`). Missing files mean defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphwalkError, Result};

pub use types::{Config, GraphConfig, LadderConfig, TraversalConfig};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "graphwalk.toml";

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl Config {
    /// Path of the user-level config file
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphwalkError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Resolve which config file applies, if any
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GraphwalkError::invalid_value(
                    "config path",
                    path.display(),
                ));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        match Self::user_config_path() {
            Ok(path) if path.exists() => Ok(Some(path)),
            _ => Ok(None),
        }
    }

    /// Locate and load the applicable config, falling back to defaults
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match Self::locate(explicit, cwd)? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        if config.ladder.alphabet.is_empty() {
            return Err(GraphwalkError::invalid_input(
                path.display(),
                "ladder.alphabet must not be empty",
            ));
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
