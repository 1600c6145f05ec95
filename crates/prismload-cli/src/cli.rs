//! CLI argument definitions for prismload.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "prismload",
    version,
    about = "Resolve syntax-highlighting grammar prerequisites",
    long_about = "prismload reads a Prism-style components.json catalog and computes, for a \
                  requested grammar, the ordered set of grammars that must be loaded before it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to prismload.toml (default: search upwards from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the language catalog, overriding [catalog].path
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the prerequisites of a grammar in load order
    Resolve {
        /// Grammar identifier (e.g. php, cpp, sass)
        language: String,
        /// Keep always-loaded base grammars in the output
        #[arg(long)]
        include_base: bool,
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the script files needed for one or more grammars
    Plan {
        /// Grammar identifiers, in registration order
        #[arg(required = true)]
        languages: Vec<String>,
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the requirement tree of a grammar
    Tree {
        /// Grammar identifier
        language: String,
        /// Maximum depth
        #[arg(long)]
        depth: Option<u32>,
        /// Show which grammars require this one
        #[arg(long)]
        inverted: bool,
    },

    /// Report requirement cycles and references to unknown grammars
    Check {
        /// Exit with an error when problems are found
        #[arg(long)]
        strict: bool,
    },

    /// List grammars in the catalog
    #[command(alias = "ls")]
    Languages,
}

pub fn parse() -> Cli {
    Cli::parse()
}
