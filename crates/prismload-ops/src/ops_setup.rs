//! Shared setup for every operation: locate configuration, decide where the
//! catalog lives, and hand out a lazily loaded catalog.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use prismload_core::catalog::LanguageCatalog;
use prismload_core::config::Config;
use prismload_core::loader::CatalogLoader;

/// Overrides coming from global CLI flags.
#[derive(Debug, Default, Clone)]
pub struct SetupOptions {
    /// Explicit `prismload.toml`; skips discovery.
    pub config: Option<PathBuf>,
    /// Explicit catalog file; wins over `[catalog].path`.
    pub catalog: Option<PathBuf>,
}

/// Configuration plus the catalog loader every operation works against.
pub struct OpsContext {
    pub config: Config,
    loader: CatalogLoader,
}

impl OpsContext {
    /// Build a context starting from `cwd`.
    pub fn setup(cwd: &Path, opts: &SetupOptions) -> miette::Result<Self> {
        let (config, root) = match &opts.config {
            Some(path) => {
                let path = prismload_util::fs::resolve_relative(cwd, path);
                let config = Config::load(&path)?;
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                (config, root)
            }
            None => Config::discover(cwd)?,
        };

        let catalog_path = match &opts.catalog {
            Some(path) => prismload_util::fs::resolve_relative(cwd, path),
            None => config.catalog_path(&root),
        };
        tracing::debug!("Catalog source: {}", catalog_path.display());

        Ok(Self {
            config,
            loader: CatalogLoader::new(catalog_path),
        })
    }

    /// Context around an in-memory catalog with default configuration.
    pub fn with_catalog(catalog: LanguageCatalog) -> Self {
        Self {
            config: Config::default(),
            loader: CatalogLoader::preloaded(catalog),
        }
    }

    /// The shared catalog; missing or broken catalogs come back empty.
    pub fn catalog(&self) -> Arc<LanguageCatalog> {
        self.loader.get()
    }

    /// Load the catalog, surfacing read and parse errors.
    pub fn catalog_strict(&self) -> miette::Result<LanguageCatalog> {
        Ok(self.loader.load_strict()?)
    }

    pub fn catalog_source(&self) -> Option<&Path> {
        self.loader.source()
    }
}
