//! Script load plan for one page: base grammars first, then each requested
//! grammar preceded by its resolved prerequisites.

use prismload_core::catalog::LanguageCatalog;
use prismload_core::config::AssetConfig;

use crate::resolver::{resolve_with_base, BaseSet};

/// Ordered, duplicate-free list of grammar script files for one page.
#[derive(Debug, Clone)]
pub struct AssetSession {
    base: BaseSet,
    prefix: String,
    minified: bool,
    files: Vec<String>,
    loaded: Vec<String>,
}

impl AssetSession {
    pub fn new(config: &AssetConfig) -> Self {
        let mut session = Self {
            base: BaseSet::new(config.base_languages.iter().cloned()),
            prefix: config.file_prefix.clone(),
            minified: config.minified,
            files: Vec::new(),
            loaded: Vec::new(),
        };
        for id in session.base.ids().to_vec() {
            let file = session.file_name(&id);
            session.push_file(file);
        }
        session
    }

    /// Script file for a grammar, e.g. `prism-php.min.js`.
    pub fn file_name(&self, id: &str) -> String {
        let ext = if self.minified { "min.js" } else { "js" };
        format!("{}{id}.{ext}", self.prefix)
    }

    /// Add `language` and its prerequisites to the plan.
    ///
    /// Returns `false` if the language was already registered in this
    /// session, in which case nothing changes.
    pub fn register(&mut self, catalog: &LanguageCatalog, language: &str) -> bool {
        if self.loaded.iter().any(|l| l == language) {
            return false;
        }

        let mut to_load = resolve_with_base(catalog, language, &self.base);
        if !self.base.contains(language) {
            to_load.push(language.to_string());
        }
        for id in &to_load {
            let file = self.file_name(id);
            self.push_file(file);
        }

        tracing::debug!("Registered {language} ({} file(s) total)", self.files.len());
        self.loaded.push(language.to_string());
        true
    }

    fn push_file(&mut self, file: String) {
        if !self.files.contains(&file) {
            self.files.push(file);
        }
    }

    /// Files in load order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Languages registered so far, in registration order.
    pub fn languages(&self) -> &[String] {
        &self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prismload_core::catalog::LanguageDefinition;

    fn catalog() -> LanguageCatalog {
        LanguageCatalog::from_definitions([
            ("markup", LanguageDefinition::new()),
            ("clike", LanguageDefinition::new()),
            ("markup-templating", LanguageDefinition::requiring(["markup"])),
            ("php", LanguageDefinition::requiring(["markup-templating"])),
            ("twig", LanguageDefinition::requiring(["markup-templating"])),
            ("c", LanguageDefinition::requiring(["clike"])),
            ("cpp", LanguageDefinition::requiring(["c"])),
        ])
    }

    #[test]
    fn starts_with_base_files() {
        let session = AssetSession::new(&AssetConfig::default());
        assert_eq!(
            session.files(),
            [
                "prism-clike.min.js",
                "prism-markup.min.js",
                "prism-javascript.min.js",
                "prism-json.min.js"
            ]
        );
        assert!(session.languages().is_empty());
    }

    #[test]
    fn register_appends_dependencies_then_language() {
        let mut session = AssetSession::new(&AssetConfig::default());
        assert!(session.register(&catalog(), "php"));
        assert_eq!(
            &session.files()[4..],
            ["prism-markup-templating.min.js", "prism-php.min.js"]
        );
    }

    #[test]
    fn shared_dependency_is_loaded_once() {
        let mut session = AssetSession::new(&AssetConfig::default());
        session.register(&catalog(), "php");
        session.register(&catalog(), "twig");
        assert_eq!(
            &session.files()[4..],
            [
                "prism-markup-templating.min.js",
                "prism-php.min.js",
                "prism-twig.min.js"
            ]
        );
        assert_eq!(session.languages(), ["php", "twig"]);
    }

    #[test]
    fn registering_twice_is_a_no_op() {
        let mut session = AssetSession::new(&AssetConfig::default());
        assert!(session.register(&catalog(), "cpp"));
        let before = session.files().to_vec();
        assert!(!session.register(&catalog(), "cpp"));
        assert_eq!(session.files(), before.as_slice());
    }

    #[test]
    fn base_language_adds_nothing() {
        let mut session = AssetSession::new(&AssetConfig::default());
        assert!(session.register(&catalog(), "markup"));
        assert_eq!(session.files().len(), 4);
    }

    #[test]
    fn unknown_language_still_gets_its_own_file() {
        let mut session = AssetSession::new(&AssetConfig::default());
        session.register(&catalog(), "brainfuck");
        assert_eq!(session.files().last().unwrap(), "prism-brainfuck.min.js");
    }

    #[test]
    fn unminified_custom_prefix() {
        let config = AssetConfig {
            base_languages: vec!["markup".to_string()],
            file_prefix: "component-".to_string(),
            minified: false,
        };
        let mut session = AssetSession::new(&config);
        session.register(&catalog(), "cpp");
        assert_eq!(
            session.files(),
            ["component-markup.js", "component-clike.js", "component-c.js", "component-cpp.js"]
        );
    }
}
