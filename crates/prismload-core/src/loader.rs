//! One-time, shared materialization of the language catalog.
//!
//! The host owns a [`CatalogLoader`] and hands out the resulting
//! `Arc<LanguageCatalog>`. The first `get()` performs the load; concurrent
//! first callers block on the same initialization, so at most one load
//! runs and every caller observes the same immutable catalog afterwards.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use prismload_util::errors::PrismloadError;

use crate::catalog::LanguageCatalog;

#[derive(Debug)]
pub struct CatalogLoader {
    source: Option<PathBuf>,
    cell: OnceLock<Arc<LanguageCatalog>>,
}

impl CatalogLoader {
    /// A loader that reads `path` on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            cell: OnceLock::new(),
        }
    }

    /// A loader around an already-built catalog; `get()` never touches disk.
    pub fn preloaded(catalog: LanguageCatalog) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Arc::new(catalog));
        Self { source: None, cell }
    }

    /// Path the catalog is read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Whether the catalog has been materialized yet.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The shared catalog, loading it on first call.
    ///
    /// A missing or unparseable catalog degrades to an empty one: every
    /// resolution then yields nothing rather than failing the caller.
    pub fn get(&self) -> Arc<LanguageCatalog> {
        self.cell
            .get_or_init(|| {
                let catalog = match self.load_strict() {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        tracing::warn!("Using an empty language catalog: {e}");
                        LanguageCatalog::empty()
                    }
                };
                Arc::new(catalog)
            })
            .clone()
    }

    /// Read the catalog from its source, bypassing the cache and the
    /// degrade-to-empty policy. Preloaded loaders return their catalog.
    pub fn load_strict(&self) -> Result<LanguageCatalog, PrismloadError> {
        match &self.source {
            Some(path) => {
                tracing::debug!("Loading language catalog from {}", path.display());
                LanguageCatalog::from_path(path)
            }
            None => Ok(self
                .cell
                .get()
                .map(|catalog| catalog.as_ref().clone())
                .unwrap_or_default()),
        }
    }
}
