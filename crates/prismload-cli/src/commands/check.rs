//! Handler for `prismload check`.

use miette::Result;

use prismload_ops::ops_check;
use prismload_ops::ops_setup::OpsContext;

pub fn exec(ctx: &OpsContext, strict: bool) -> Result<()> {
    ops_check::check(ctx, strict)
}
