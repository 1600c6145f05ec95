//! The language catalog: which grammars exist and what each one requires.
//!
//! The on-disk shape follows Prism's `components.json`:
//!
//! ```json
//! { "languages": { "cpp": { "title": "C++", "require": "c" },
//!                  "php": { "require": ["markup-templating"] } } }
//! ```
//!
//! `require` may be a single identifier or a list. It is normalized into a
//! plain `Vec<String>` once, while the catalog is built, so nothing
//! downstream has to care about the two shapes.

use std::collections::BTreeMap;
use std::path::Path;

use prismload_util::errors::PrismloadError;
use prismload_util::fs::read_to_string;
use serde::Deserialize;

/// Key under `languages` that carries component path metadata rather than
/// a grammar.
const META_KEY: &str = "meta";

/// A single grammar's declared prerequisites plus passthrough metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDefinition {
    /// Identifiers that must be loaded before this grammar, in declared order.
    pub requires: Vec<String>,
    /// Human readable name, if the catalog provides one.
    pub title: Option<String>,
}

impl LanguageDefinition {
    /// A definition with no prerequisites.
    pub fn new() -> Self {
        Self::default()
    }

    /// A definition requiring `requires`, in the given order.
    pub fn requiring<I, S>(requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requires: requires.into_iter().map(Into::into).collect(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// `require` as it appears in the JSON: a scalar or a list. Non-string list
/// elements are dropped during normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Require {
    One(String),
    Many(Vec<serde_json::Value>),
}

impl From<Require> for Vec<String> {
    fn from(value: Require) -> Self {
        match value {
            Require::One(id) => vec![id],
            Require::Many(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(id) => Some(id),
                    _ => None,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    require: Option<Require>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ComponentsFile {
    #[serde(default)]
    languages: BTreeMap<String, serde_json::Value>,
}

/// Immutable mapping from language identifier to its definition.
///
/// Iteration order is the sorted order of identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, LanguageDefinition>,
}

impl LanguageCatalog {
    /// A catalog with no languages. Every resolution against it is empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from in-memory definitions. Later duplicates win.
    pub fn from_definitions<I, S>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (S, LanguageDefinition)>,
        S: Into<String>,
    {
        Self {
            languages: definitions
                .into_iter()
                .map(|(id, def)| (id.into(), def))
                .collect(),
        }
    }

    /// Parse a `components.json`-shaped document.
    ///
    /// Entries that are not well-formed definition objects are kept as
    /// definitions with no requirements. Only a document that is not JSON,
    /// or whose `languages` value is not an object, is rejected.
    pub fn from_json_str(content: &str) -> Result<Self, PrismloadError> {
        let file: ComponentsFile =
            serde_json::from_str(content).map_err(|e| PrismloadError::Catalog {
                message: format!("Failed to parse catalog: {e}"),
            })?;

        let mut languages = BTreeMap::new();
        for (id, value) in file.languages {
            if id == META_KEY {
                continue;
            }
            let raw = match serde_json::from_value::<RawDefinition>(value) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!("Malformed entry '{id}', treating as no requirements: {e}");
                    RawDefinition::default()
                }
            };
            languages.insert(
                id,
                LanguageDefinition {
                    requires: raw.require.map(Vec::from).unwrap_or_default(),
                    title: raw.title,
                },
            );
        }

        tracing::debug!("Parsed catalog with {} languages", languages.len());
        Ok(Self { languages })
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, PrismloadError> {
        let content = read_to_string(path).map_err(|e| PrismloadError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_json_str(&content)
    }

    pub fn get(&self, id: &str) -> Option<&LanguageDefinition> {
        self.languages.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.languages.contains_key(id)
    }

    /// Declared requirements of `id`; empty when `id` is unknown.
    pub fn requires_of(&self, id: &str) -> &[String] {
        self.languages
            .get(id)
            .map(|def| def.requires.as_slice())
            .unwrap_or(&[])
    }

    /// All identifiers, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageDefinition)> {
        self.languages.iter().map(|(id, def)| (id.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
