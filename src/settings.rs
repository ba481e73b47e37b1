// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::{Error, Result};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub sort: bool,
    pub limit: Option<usize>,
    pub unique: bool,
}

impl Settings {
    /// Loads the embedded defaults, then the given overlay file on top of them.
    ///
    /// The overlay format is detected by file extension.
    pub fn load(overlay: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        if let Some(path) = overlay {
            if !path.exists() {
                return Err(Error::FileNotFound {
                    filename: path.to_string_lossy().into(),
                });
            }
            log::debug!("load settings overlay from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort: true,
            limit: None,
            unique: false,
        }
    }
}

#[cfg(test)]
mod tests;
