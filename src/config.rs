//! Application configuration
//!
//! Settings are stored as JSON in the user's config directory:
//! - Linux: ~/.config/prompt-gallery/config.json
//! - macOS: ~/Library/Application Support/prompt-gallery/config.json
//! - Windows: %APPDATA%\prompt-gallery\config.json
//!
//! Every field is optional in the file; missing fields use defaults.
//! The gallery itself lives in the user's data directory unless
//! `library_root` says otherwise:
//! - Linux: ~/.local/share/prompt-gallery/
//! - macOS: ~/Library/Application Support/prompt-gallery/
//! - Windows: %APPDATA%\prompt-gallery\

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::ingest::process::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_WIDTH};
use crate::ingest::IngestOptions;

/// User-tunable settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory that holds `images/` and `index.html`
    pub library_root: PathBuf,
    /// Images wider than this are scaled down
    pub max_width: u32,
    /// JPEG quality (clamped to 1-100)
    pub jpeg_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_root: Self::default_library_root(),
            max_width: DEFAULT_MAX_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Config {
    /// Load the config from the standard location.
    /// Falls back to defaults if the file is missing or broken.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("⚠️  {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load the config from `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the default gallery root.
    /// Falls back to the executable's directory when there is no data dir.
    pub fn default_library_root() -> PathBuf {
        if let Some(mut path) = dirs::data_dir() {
            path.push("prompt-gallery");
            return path;
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the path where the config file should be stored
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("prompt-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Options for the ingest step
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            max_width: self.max_width.max(1),
            quality: self.jpeg_quality.clamp(1, 100),
        }
    }
}
