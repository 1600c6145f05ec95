//! Core dependency resolution: depth-first, post-order accumulation of a
//! grammar's transitive prerequisites with a cycle guard.
//!
//! Requirements are appended only after their own requirements, so the
//! output is a valid load order. Base languages take part in the walk (so
//! they still stop re-recursion) and are stripped only at the very end.

use std::collections::{BTreeSet, HashSet};

use prismload_core::catalog::LanguageCatalog;
use prismload_core::config::DEFAULT_BASE_LANGUAGES;

/// Grammars callers load unconditionally.
pub const BASE_LANGUAGES: [&str; 4] = DEFAULT_BASE_LANGUAGES;

/// The set of identifiers excluded from every resolution result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSet {
    ids: Vec<String>,
    lookup: BTreeSet<String>,
}

impl BaseSet {
    /// Build a base set. Order is kept for callers that emit base files;
    /// duplicates are dropped.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            ids: Vec::new(),
            lookup: BTreeSet::new(),
        };
        for id in ids {
            let id = id.into();
            if set.lookup.insert(id.clone()) {
                set.ids.push(id);
            }
        }
        set
    }

    /// A base set that excludes nothing.
    pub fn none() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains(id)
    }

    /// Identifiers in the order they were given.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl Default for BaseSet {
    fn default() -> Self {
        Self::new(BASE_LANGUAGES)
    }
}

/// Accumulator for a single resolution.
struct Walk<'a> {
    catalog: &'a LanguageCatalog,
    visited: HashSet<&'a str>,
    resolved: Vec<&'a str>,
    seen: HashSet<&'a str>,
}

/// A language whose requirements are being walked; `next` indexes the
/// requirement to descend into next.
struct Frame<'a> {
    id: &'a str,
    requires: &'a [String],
    next: usize,
}

impl<'a> Walk<'a> {
    fn new(catalog: &'a LanguageCatalog) -> Self {
        Self {
            catalog,
            visited: HashSet::new(),
            resolved: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Mark `id` visited and open a frame for it if it has a definition.
    fn enter(&mut self, id: &'a str) -> Option<Frame<'a>> {
        if !self.visited.insert(id) {
            return None;
        }
        let catalog = self.catalog;
        catalog.get(id).map(|def| Frame {
            id,
            requires: def.requires.as_slice(),
            next: 0,
        })
    }

    fn append(&mut self, id: &'a str) {
        if self.seen.insert(id) {
            self.resolved.push(id);
        }
    }

    /// Post-order walk from `target` on an explicit stack. A requirement is
    /// appended once its own frame is finished, or straight away when it
    /// opens no frame (already visited or not in the catalog).
    fn visit(&mut self, target: &'a str) {
        let mut stack: Vec<Frame<'a>> = self.enter(target).into_iter().collect();
        while let Some(frame) = stack.last_mut() {
            if let Some(requirement) = frame.requires.get(frame.next) {
                frame.next += 1;
                match self.enter(requirement) {
                    Some(child) => stack.push(child),
                    None => self.append(requirement),
                }
                continue;
            }
            let done = frame.id;
            stack.pop();
            if !stack.is_empty() {
                self.append(done);
            }
        }
    }
}

/// Requirements of `target` in load order, excluding `target` itself but
/// keeping base languages.
///
/// Unknown identifiers are leaves; cycles terminate at the first repeat.
pub fn resolve_unfiltered(catalog: &LanguageCatalog, target: &str) -> Vec<String> {
    let mut walk = Walk::new(catalog);
    walk.visit(target);
    walk.resolved
        .into_iter()
        .filter(|id| *id != target)
        .map(str::to_string)
        .collect()
}

/// Requirements of `target` in load order, minus `base` and `target`.
pub fn resolve_with_base(catalog: &LanguageCatalog, target: &str, base: &BaseSet) -> Vec<String> {
    let mut languages = resolve_unfiltered(catalog, target);
    languages.retain(|id| !base.contains(id));
    tracing::debug!(
        "Resolved {target}: {} prerequisite(s) after base filtering",
        languages.len()
    );
    languages
}

/// Requirements of `target` in load order, minus [`BASE_LANGUAGES`].
pub fn resolve(catalog: &LanguageCatalog, target: &str) -> Vec<String> {
    resolve_with_base(catalog, target, &BaseSet::default())
}
