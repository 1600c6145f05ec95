use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use prismload_util::errors::PrismloadError;
use prismload_util::fs::{find_ancestor_with, read_to_string, resolve_relative};

use crate::language::is_valid_language_id;
use crate::CONFIG_FILE_NAME;

/// Project configuration loaded from `prismload.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub assets: AssetConfig,
}

/// Where the language catalog lives, from `[catalog]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file, relative to the directory holding `prismload.toml`.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("components.json")
}

/// Script file naming and always-loaded grammars, from `[assets]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_base_languages", rename = "base-languages")]
    pub base_languages: Vec<String>,
    #[serde(default = "default_file_prefix", rename = "file-prefix")]
    pub file_prefix: String,
    #[serde(default = "default_minified")]
    pub minified: bool,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_languages: default_base_languages(),
            file_prefix: default_file_prefix(),
            minified: default_minified(),
        }
    }
}

/// Grammars every page loads unconditionally.
pub const DEFAULT_BASE_LANGUAGES: [&str; 4] = ["clike", "markup", "javascript", "json"];

fn default_base_languages() -> Vec<String> {
    DEFAULT_BASE_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

fn default_file_prefix() -> String {
    "prism-".to_string()
}

fn default_minified() -> bool {
    true
}

impl Config {
    /// Parse a `prismload.toml` from a string.
    pub fn from_str(content: &str) -> Result<Self, PrismloadError> {
        toml::from_str(content).map_err(|e| PrismloadError::Config {
            message: format!("Failed to parse {CONFIG_FILE_NAME}: {e}"),
        })
    }

    /// Load the configuration at `path`, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = read_to_string(path).map_err(|e| PrismloadError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let config = Self::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Walk up from `start` looking for `prismload.toml`.
    ///
    /// Returns the configuration together with the directory that relative
    /// paths are resolved against: the config's directory, or `start` when
    /// no config file was found.
    pub fn discover(start: &Path) -> miette::Result<(Self, PathBuf)> {
        match find_ancestor_with(start, CONFIG_FILE_NAME) {
            Some(root) => {
                let config = Self::load(&root.join(CONFIG_FILE_NAME))?;
                Ok((config, root))
            }
            None => Ok((Self::default(), start.to_path_buf())),
        }
    }

    /// Reject base-language entries that are not grammar identifiers.
    pub fn validate(&self) -> Result<(), PrismloadError> {
        if let Some(bad) = self
            .assets
            .base_languages
            .iter()
            .find(|id| !is_valid_language_id(id))
        {
            return Err(PrismloadError::Config {
                message: format!("Invalid base language '{bad}' (expected [a-z0-9-]+)"),
            });
        }
        Ok(())
    }

    /// Catalog path resolved against `root`.
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        resolve_relative(root, &self.catalog.path)
    }
}
