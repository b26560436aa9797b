//! Project configuration (avatar.yaml).
//!
//! Every field is optional; CLI flags override config values, which in turn
//! override the builtin defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colorize::ColourTable;
use crate::error::{AvatarError, Result};
use crate::generate::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::stamp::Geometry;

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "avatar.yaml";

/// Default output size for stamped and generated avatars.
pub const DEFAULT_SIZE: u32 = 1024;

/// Configuration loaded from avatar.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding badge assets.
    #[serde(default = "default_assets")]
    pub assets: PathBuf,

    /// Default output size in pixels.
    pub size: Option<u32>,

    /// Default generation model.
    pub model: Option<String>,

    /// Image generation endpoint.
    pub endpoint: Option<String>,

    /// Extra named colours for the colorizer (hex or CSS names).
    pub colours: BTreeMap<String, String>,

    /// Overlay geometry overrides.
    pub geometry: Geometry,
}

fn default_assets() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            size: None,
            model: None,
            endpoint: None,
            colours: BTreeMap::new(),
            geometry: Geometry::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit config file, else `avatar.yaml` in the current
    /// directory if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = Path::new(CONFIG_FILENAME);
        if local.is_file() {
            Self::load(local)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AvatarError::Config {
            message: format!("Invalid {}: {}", CONFIG_FILENAME, e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    pub fn effective_size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    pub fn effective_model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Builtin colour table extended with the configured colours.
    pub fn colour_table(&self) -> Result<ColourTable> {
        let mut table = ColourTable::new();
        table.extend_from_strings(&self.colours)?;
        Ok(table)
    }
}
