//! Operation: print the prerequisites of a grammar.

use prismload_core::language::is_valid_language_id;
use prismload_resolver::resolver::{resolve_with_base, BaseSet};

use crate::ops_setup::OpsContext;

/// Options for `prismload resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Keep base languages in the output.
    pub include_base: bool,
    /// Print a JSON array instead of one id per line.
    pub json: bool,
}

/// Prerequisites of `language` in load order, honouring the configured base set.
pub fn prerequisites(ctx: &OpsContext, language: &str, include_base: bool) -> Vec<String> {
    let base = if include_base {
        BaseSet::none()
    } else {
        BaseSet::new(ctx.config.assets.base_languages.iter().cloned())
    };
    resolve_with_base(&ctx.catalog(), language, &base)
}

pub fn resolve(ctx: &OpsContext, language: &str, opts: &ResolveOptions) -> miette::Result<()> {
    if !is_valid_language_id(language) {
        tracing::warn!("'{language}' does not look like a grammar identifier");
    }

    let languages = prerequisites(ctx, language, opts.include_base);

    if opts.json {
        println!("{}", crate::to_json(&languages)?);
    } else {
        for id in &languages {
            println!("{id}");
        }
    }
    Ok(())
}
