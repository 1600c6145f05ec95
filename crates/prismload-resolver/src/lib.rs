//! Grammar dependency resolution: ordered, duplicate-free prerequisite lists
//! for a requested language, plus the catalog graph, health report, and
//! per-page script load plan built on top of it.

pub mod graph;
pub mod plan;
pub mod report;
pub mod resolver;

pub use resolver::{resolve, resolve_unfiltered, resolve_with_base, BaseSet, BASE_LANGUAGES};
