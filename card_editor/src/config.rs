//! Editor configuration, read from a TOML file.

use std::path::Path;

use card_schema::{CharacterCard, Gender};
use serde::Deserialize;
use tracing::debug;

use crate::error::{EditorError, EditorResult};
use crate::session::View;

/// User-facing settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Panel shown at start.
    pub default_view: View,

    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Echo the saved character card text after saving.
    pub echo_on_save: bool,

    /// Gender presets offered as hints. Free text is always accepted.
    pub gender_options: Vec<String>,

    /// MBTI presets offered as hints. Free text is always accepted.
    pub mbti_options: Vec<String>,

    /// Shell prompt.
    pub prompt: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_view: View::Character,
            log_level: "info".to_string(),
            echo_on_save: true,
            gender_options: Gender::PRESETS.iter().map(|s| s.to_string()).collect(),
            mbti_options: CharacterCard::PERSONALITY_PRESETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            prompt: "> ".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from a file. A missing file yields defaults.
    pub fn load(path: &Path) -> EditorResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| EditorError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).map_err(|source| EditorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Preset hints for a field path, if the field has any.
    pub fn presets_for(&self, path: &str) -> Option<&[String]> {
        match path {
            "gender" => Some(self.gender_options.as_slice()),
            "personality_type" => Some(self.mbti_options.as_slice()),
            _ => None,
        }
    }
}
