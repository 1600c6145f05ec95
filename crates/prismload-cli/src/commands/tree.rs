//! Handler for `prismload tree`.

use miette::Result;

use prismload_ops::ops_setup::OpsContext;
use prismload_ops::ops_tree::{self, TreeOptions};

pub fn exec(ctx: &OpsContext, language: &str, depth: Option<u32>, inverted: bool) -> Result<()> {
    let opts = TreeOptions {
        depth: depth.map(|d| d as usize),
        inverted,
    };
    ops_tree::tree(ctx, language, &opts)
}
