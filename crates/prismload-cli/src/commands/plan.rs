//! Handler for `prismload plan`.

use miette::Result;

use prismload_ops::ops_plan;
use prismload_ops::ops_setup::OpsContext;

pub fn exec(ctx: &OpsContext, languages: &[String], json: bool) -> Result<()> {
    ops_plan::plan(ctx, languages, json)
}
