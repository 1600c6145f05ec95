//! Catalog health report: requirement cycles and dangling references.
//!
//! Neither is an error for resolution, which degrades gracefully; the report
//! exists so catalog maintainers can see what gets silently truncated.

use std::fmt;

use prismload_core::catalog::LanguageCatalog;

use crate::graph::{CatalogGraph, MissingRequirement};

#[derive(Debug, Default)]
pub struct CatalogReport {
    pub languages: usize,
    pub cycles: Vec<Vec<String>>,
    pub missing: Vec<MissingRequirement>,
}

impl CatalogReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: &LanguageCatalog) -> Self {
        let graph = CatalogGraph::from_catalog(catalog);
        Self {
            languages: catalog.len(),
            cycles: graph.cycles(),
            missing: graph.missing(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.cycles.is_empty() && self.missing.is_empty()
    }

    /// Number of individual findings.
    pub fn len(&self) -> usize {
        self.cycles.len() + self.missing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "{} languages, no problems found.", self.languages);
        }
        writeln!(f, "{} languages, {} problem(s):", self.languages, self.len())?;
        for cycle in &self.cycles {
            if cycle.len() == 1 {
                writeln!(f, "  cycle: {} requires itself", cycle[0])?;
            } else {
                writeln!(f, "  cycle: {}", cycle.join(" <-> "))?;
            }
        }
        for m in &self.missing {
            writeln!(f, "  {m}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MissingRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing: {} requires {}, which is not in the catalog",
            self.language, self.requirement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prismload_core::catalog::LanguageDefinition;

    #[test]
    fn empty_report() {
        let report = CatalogReport::new();
        assert!(report.is_clean());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "0 languages, no problems found.\n");
    }

    #[test]
    fn report_with_findings() {
        let catalog = LanguageCatalog::from_definitions([
            ("a", LanguageDefinition::requiring(["b"])),
            ("b", LanguageDefinition::requiring(["a"])),
            ("loop", LanguageDefinition::requiring(["loop"])),
            ("crystal", LanguageDefinition::requiring(["ruby"])),
        ]);
        let report = CatalogReport::from_catalog(&catalog);
        assert!(!report.is_clean());
        assert_eq!(report.languages, 4);
        assert_eq!(report.len(), 3);

        let s = report.to_string();
        assert!(s.contains("cycle: a <-> b"));
        assert!(s.contains("cycle: loop requires itself"));
        assert!(s.contains("missing: crystal requires ruby"));
    }
}
