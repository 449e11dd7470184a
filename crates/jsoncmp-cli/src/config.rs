use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{ColorMode, OutputFormat};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = ".jsoncmp.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for the command-line front end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default output format when `--format` is not given.
    pub format: OutputFormat,
    /// Default color mode when `--color` is not given.
    pub color: ColorMode,
    /// Context lines around each hunk of the document view.
    pub context_lines: usize,
    /// Whether text output shows the values next to each difference.
    pub show_values: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: ColorMode::Auto,
            context_lines: 3,
            show_values: true,
        }
    }
}

impl CliConfig {
    /// Load from an explicit path, else from [`DEFAULT_CONFIG_FILE`] in the
    /// working directory if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?path, "loaded config");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
