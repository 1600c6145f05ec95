use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all prismload operations.
///
/// Dependency resolution itself never fails; these variants cover the
/// surrounding plumbing (reading catalogs, parsing configuration).
#[derive(Debug, Error, Diagnostic)]
pub enum PrismloadError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The language catalog could not be read or parsed.
    #[error("Catalog error: {message}")]
    #[diagnostic(help("The catalog must be a JSON object with a `languages` map"))]
    Catalog { message: String },

    /// Invalid or malformed `prismload.toml`.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your prismload.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PrismloadResult<T> = miette::Result<T>;
