//! Operation: display the requirement tree of a grammar.

use prismload_resolver::graph::CatalogGraph;

use crate::ops_setup::OpsContext;

/// Options for `prismload tree`.
#[derive(Debug, Default)]
pub struct TreeOptions {
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show which languages require this one instead.
    pub inverted: bool,
}

pub fn render(ctx: &OpsContext, language: &str, opts: &TreeOptions) -> String {
    let graph = CatalogGraph::from_catalog(&ctx.catalog());
    if opts.inverted {
        graph.print_inverted(language)
    } else {
        graph.print_tree(language, opts.depth)
    }
}

pub fn tree(ctx: &OpsContext, language: &str, opts: &TreeOptions) -> miette::Result<()> {
    let output = render(ctx, language, opts);
    if output.is_empty() {
        println!("Language '{language}' not found in the catalog.");
    } else {
        print!("{output}");
    }
    Ok(())
}
