//! Operation: report requirement cycles and dangling references in the
//! catalog.

use prismload_resolver::report::CatalogReport;
use prismload_util::errors::PrismloadError;

use crate::ops_setup::OpsContext;

/// Load the catalog strictly and print its health report.
///
/// With `strict`, a report with findings is an error.
pub fn check(ctx: &OpsContext, strict: bool) -> miette::Result<()> {
    let catalog = ctx.catalog_strict()?;
    if let Some(source) = ctx.catalog_source() {
        prismload_util::progress::status("Checking", &source.display().to_string());
    }

    let report = CatalogReport::from_catalog(&catalog);
    print!("{report}");

    if !report.is_clean() {
        prismload_util::progress::status_warn(
            "Warning",
            "some requirements will be skipped during resolution",
        );
    }
    if strict && !report.is_clean() {
        return Err(PrismloadError::Catalog {
            message: format!("{} problem(s) found", report.len()),
        }
        .into());
    }
    Ok(())
}
