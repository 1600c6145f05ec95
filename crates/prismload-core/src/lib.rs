//! Core data types for prismload.
//!
//! This crate defines the data the dependency resolver works over: language
//! identifiers, the immutable language catalog (normalized once at
//! construction), the single-flight catalog loader, and the `prismload.toml`
//! configuration.
//!
//! This crate is intentionally free of resolution logic and async code.

/// Default name of the configuration file looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "prismload.toml";

pub mod catalog;
pub mod config;
pub mod language;
pub mod loader;
