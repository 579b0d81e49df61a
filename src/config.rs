//! Game configuration, read from a RON file.
//!
//! ```ron
//! (
//!     log_filter: "info,tori_tray=debug",
//!     mascot_name: "Tori",
//!     echo_commands: true,
//!     show_catalog: true,
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::DEFAULT_MASCOT_NAME;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tori_tray.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `tracing` filter directives handed to Bevy's `LogPlugin`.
    pub log_filter: String,
    pub mascot_name: String,
    /// Echo each scripted command before its output.
    pub echo_commands: bool,
    /// List the foods and stickers on offer under every view.
    pub show_catalog: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn,tori_tray=info".to_string(),
            mascot_name: DEFAULT_MASCOT_NAME.to_string(),
            echo_commands: true,
            show_catalog: true,
        }
    }
}

impl GameConfig {
    pub fn from_ron(path: &Path, text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(path, &text)
    }

    /// An explicit path must exist. Without one, `tori_tray.ron` is used when
    /// present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
