pub mod ops_check;
pub mod ops_languages;
pub mod ops_plan;
pub mod ops_resolve;
pub mod ops_setup;
pub mod ops_tree;

use prismload_util::errors::PrismloadError;
use serde::Serialize;

/// Serialize command output for `--json`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> miette::Result<String> {
    serde_json::to_string(value).map_err(|e| {
        PrismloadError::Generic {
            message: format!("Failed to serialize output: {e}"),
        }
        .into()
    })
}
