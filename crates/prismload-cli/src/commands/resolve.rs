//! Handler for `prismload resolve`.

use miette::Result;

use prismload_ops::ops_resolve::{self, ResolveOptions};
use prismload_ops::ops_setup::OpsContext;

pub fn exec(ctx: &OpsContext, language: &str, include_base: bool, json: bool) -> Result<()> {
    let opts = ResolveOptions { include_base, json };
    ops_resolve::resolve(ctx, language, &opts)
}
