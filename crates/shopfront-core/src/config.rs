//! User configuration.
//!
//! A small TOML file under the platform config dir tunes defaults. The
//! payload path precedence is flag, then environment, then this file;
//! every step is optional and a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ShopfrontError;

/// User-level configuration (`config.toml` under the platform config dir).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Preferred output mode for non-interactive commands
    /// (`pretty`, `text`, or `json`).
    #[serde(default)]
    pub output: Option<String>,
    /// Default host payload path when no flag or env var is given.
    #[serde(default)]
    pub payload_path: Option<PathBuf>,
}

/// Path to the user config file, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shopfront").join("config.toml"))
}

/// Load user configuration from `path`. Returns defaults if the file
/// doesn't exist.
///
/// # Errors
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_user_config(path: &Path) -> Result<UserConfig, ShopfrontError> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }
    let content =
        std::fs::read_to_string(path).map_err(|source| ShopfrontError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    let config: UserConfig =
        toml::from_str(&content).map_err(|source| ShopfrontError::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(config)
}

/// Resolve the host payload path: CLI flag beats `SHOPFRONT_PAYLOAD`,
/// which beats the user config entry. `None` means the built-in empty
/// payload.
#[must_use]
pub fn resolve_payload_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    user: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.or(env).or(user)
}
