//! Command dispatch and handler modules.

mod check;
mod languages;
mod plan;
mod resolve;
mod tree;

use miette::Result;
use prismload_ops::ops_setup::{OpsContext, SetupOptions};
use prismload_util::errors::PrismloadError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(PrismloadError::Io)?;
    let ctx = OpsContext::setup(
        &cwd,
        &SetupOptions {
            config: cli.config,
            catalog: cli.catalog,
        },
    )?;

    match cli.command {
        Command::Resolve {
            language,
            include_base,
            json,
        } => resolve::exec(&ctx, &language, include_base, json),
        Command::Plan { languages, json } => plan::exec(&ctx, &languages, json),
        Command::Tree {
            language,
            depth,
            inverted,
        } => tree::exec(&ctx, &language, depth, inverted),
        Command::Check { strict } => check::exec(&ctx, strict),
        Command::Languages => languages::exec(&ctx),
    }
}
