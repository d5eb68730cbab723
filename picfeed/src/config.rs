//! Configuration stored in `picfeed.toml`.
//!
//! ```toml
//! [validation]
//! require_valid_email = true
//! require_valid_url = false
//! require_username = false
//!
//! [search]
//! case_insensitive_keywords = false
//!
//! [notices]
//! error_display_secs = 5
//! ```
//!
//! Every key is optional; missing sections and keys fall back to defaults.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{notice::DEFAULT_NOTICE_DURATION, search::SearchOptions, validators::ValidationPolicy};

/// Default file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "picfeed.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub validation: ValidationPolicy,
    #[serde(default)]
    pub search: SearchOptions,
    #[serde(default)]
    pub notices: NoticeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeSettings {
    #[serde(default = "default_error_display_secs")]
    pub error_display_secs: u64,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            error_display_secs: default_error_display_secs(),
        }
    }
}

impl NoticeSettings {
    pub fn display_for(&self) -> Duration {
        Duration::from_secs(self.error_display_secs)
    }
}

fn default_error_display_secs() -> u64 {
    DEFAULT_NOTICE_DURATION.as_secs()
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `dir/picfeed.toml` when it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }
}
