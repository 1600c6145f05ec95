//! Shared utilities for prismload.
//!
//! This crate provides cross-cutting concerns used by the other prismload
//! crates: the unified error type, filesystem helpers, and styled console
//! status lines.

pub mod errors;
pub mod fs;
pub mod progress;
