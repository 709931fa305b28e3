//! JSON configuration for the command line front-end.
//!
//! ```json
//! {
//!   "fontTypes": { "Noto Serif": "serif", "Roboto": "sans-serif" },
//!   "fontDir": "./public",
//!   "fallbackSuffix": "Fallback"
//! }
//! ```

use fontfall_core::{ConfigError, FontTypes, FontfallBuilder};
use fontfall_resource::FilesystemSrcResolver;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Required. Left optional here so a missing mapping is reported as
    /// [`ConfigError::MissingFontTypes`] when the plugin is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_types: Option<FontTypes>,
    /// Directory `src` URLs are resolved against. Defaults to the current
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_suffix: Option<String>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidConfigFile {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reads a config file. A relative `fontDir` is taken relative to the
    /// directory containing the file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let invalid = |message: String| ConfigError::InvalidConfigFile {
            path: path.display().to_string(),
            message,
        };

        let text = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let mut config: Config = serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))?;

        if let (Some(dir), Some(parent)) = (&config.font_dir, path.parent())
            && dir.is_relative()
        {
            config.font_dir = Some(parent.join(dir));
        }
        log::debug!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Turns the config into a plugin builder. Validation happens in
    /// [`FontfallBuilder::build`].
    pub fn into_builder(self) -> FontfallBuilder {
        let mut builder = FontfallBuilder::new();
        if let Some(font_types) = self.font_types {
            builder = builder.font_types(font_types);
        }
        if let Some(dir) = self.font_dir {
            builder = builder.src_url_to_filename(FilesystemSrcResolver::new(dir).into_fn());
        }
        if let Some(suffix) = self.fallback_suffix {
            builder = builder.fallback_suffix(suffix);
        }
        builder
    }
}
