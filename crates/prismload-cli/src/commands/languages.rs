//! Handler for `prismload languages`.

use miette::Result;

use prismload_ops::ops_languages;
use prismload_ops::ops_setup::OpsContext;

pub fn exec(ctx: &OpsContext) -> Result<()> {
    ops_languages::languages(ctx)
}
