//! # Configuration
//!
//! Configuration is loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `TRELLIS_API_BASE_URL`, `TRELLO_DEVELOPER_KEY`,
//!    `TRELLO_MEMBER_TOKEN`, `TRELLIS_TIMEOUT_SECS`, `TRELLIS_LOG_LEVEL`.
//! 2. **Config file**: `trellis.toml` in the OS config directory (via the
//!    `directories` crate), or an explicit path.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api_base_url` | `https://api.trello.com/1` | API root |
//! | `developer_key` | none | Application key |
//! | `member_token` | none | Token authorizing access to a member's data |
//! | `timeout_secs` | `30` | Per-request timeout |
//! | `log_level` | `warn` | Default log level for the CLI |

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};

pub const CONFIG_FILE_NAME: &str = "trellis.toml";
pub const DEFAULT_API_BASE_URL: &str = "https://api.trello.com/1";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrellisConfig {
    /// Root of the REST API.
    #[config(env = "TRELLIS_API_BASE_URL", default = "https://api.trello.com/1")]
    pub api_base_url: String,

    /// Application key issued to the developer.
    #[config(env = "TRELLO_DEVELOPER_KEY")]
    pub developer_key: Option<String>,

    /// Token granting access to the member's data.
    #[config(env = "TRELLO_MEMBER_TOKEN")]
    pub member_token: Option<String>,

    /// Per-request timeout in seconds.
    #[config(env = "TRELLIS_TIMEOUT_SECS", default = 30)]
    pub timeout_secs: u64,

    /// Default log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[config(env = "TRELLIS_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for TrellisConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            developer_key: None,
            member_token: None,
            timeout_secs: 30,
            log_level: "warn".to_string(),
        }
    }
}

impl TrellisConfig {
    /// Load from the environment and the default config file, if any.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    /// Load from the environment and an optional config file.
    ///
    /// A missing file is not an error; defaults fill in.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = TrellisConfig::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Developer key and member token, both required to talk to the service.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let key = non_empty(self.developer_key.as_deref()).ok_or_else(|| {
            TrellisError::configuration(
                "developer key is not set (TRELLO_DEVELOPER_KEY or `developer_key`)",
            )
        })?;
        let token = non_empty(self.member_token.as_deref()).ok_or_else(|| {
            TrellisError::configuration(
                "member token is not set (TRELLO_MEMBER_TOKEN or `member_token`)",
            )
        })?;
        Ok((key, token))
    }
}

/// `trellis.toml` inside the OS config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "trellis", "trellis")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
