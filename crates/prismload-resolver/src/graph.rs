//! Requirement graph over a language catalog, used for diagnostics and tree
//! rendering. Resolution itself does not go through the graph.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use prismload_core::catalog::LanguageCatalog;

/// A node in the requirement graph.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LanguageNode {
    pub id: String,
    /// `false` for identifiers that are only ever referenced by `require`.
    pub known: bool,
}

impl fmt::Display for LanguageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.known {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} (not in catalog)", self.id)
        }
    }
}

/// Edge label: position of the requirement in the declaring language's list.
#[derive(Debug, Clone, Copy)]
pub struct RequireEdge {
    pub position: usize,
}

/// A requirement that names no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingRequirement {
    pub language: String,
    pub requirement: String,
}

/// Directed graph `language -> requirement`, backed by petgraph.
pub struct CatalogGraph {
    graph: DiGraph<LanguageNode, RequireEdge>,
    index: HashMap<String, NodeIndex>,
}

impl CatalogGraph {
    pub fn from_catalog(catalog: &LanguageCatalog) -> Self {
        let mut g = Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        };
        for id in catalog.ids() {
            g.add_node(id, true);
        }
        for (id, def) in catalog.iter() {
            let from = g.index[id];
            for (position, requirement) in def.requires.iter().enumerate() {
                let to = g.add_node(requirement, false);
                if !g.graph.edges(from).any(|e| e.target() == to) {
                    g.graph.add_edge(from, to, RequireEdge { position });
                }
            }
        }
        g
    }

    fn add_node(&mut self, id: &str, known: bool) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(LanguageNode {
            id: id.to_string(),
            known,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &LanguageNode {
        &self.graph[idx]
    }

    /// Direct requirements of a node, in declaration order.
    pub fn requirements_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.weight().position, e.target()))
            .collect();
        edges.sort();
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Languages that directly require this node, sorted by identifier.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut sources: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect();
        sources.sort_by(|a, b| self.graph[*a].id.cmp(&self.graph[*b].id));
        sources
    }

    /// Render the requirement tree below `root`.
    ///
    /// A node already on the current path is printed with a `(cycle)` marker
    /// and not expanded again. Returns an empty string for unknown roots.
    pub fn print_tree(&self, root: &str, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        let Some(idx) = self.find(root) else {
            return output;
        };
        output.push_str(&format!("{}\n", self.graph[idx]));

        let mut on_path = HashSet::new();
        on_path.insert(idx);
        let children = self.requirements_of(idx);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.print_subtree(
                &mut output,
                child,
                "",
                i == count - 1,
                1,
                max_depth,
                &mut on_path,
                Self::requirements_of,
            );
        }
        output
    }

    /// Render who requires `id`, transitively.
    pub fn print_inverted(&self, id: &str) -> String {
        let mut output = String::new();
        let Some(idx) = self.find(id) else {
            return output;
        };
        output.push_str(&format!("{}\n", self.graph[idx]));

        let mut on_path = HashSet::new();
        on_path.insert(idx);
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep) in dependents.into_iter().enumerate() {
            self.print_subtree(
                &mut output,
                dep,
                "",
                i == count - 1,
                1,
                None,
                &mut on_path,
                Self::dependents_of,
            );
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        on_path: &mut HashSet<NodeIndex>,
        next: fn(&Self, NodeIndex) -> Vec<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];

        if !on_path.insert(idx) {
            output.push_str(&format!("{prefix}{connector}{node} (cycle)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        let expand = max_depth.map_or(true, |max| depth < max);
        if expand {
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            let children = next(self, idx);
            let count = children.len();
            for (i, child) in children.into_iter().enumerate() {
                self.print_subtree(
                    output,
                    child,
                    &child_prefix,
                    i == count - 1,
                    depth + 1,
                    max_depth,
                    on_path,
                    next,
                );
            }
        }

        on_path.remove(&idx);
    }

    /// Strongly connected requirement cycles, including self-requirements.
    ///
    /// Members of each cycle are sorted; cycles are sorted by first member.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let members: BTreeSet<String> =
                    scc.iter().map(|&idx| self.graph[idx].id.clone()).collect();
                members.into_iter().collect()
            })
            .collect();
        cycles.sort();
        cycles
    }

    /// Every `require` entry that points outside the catalog, sorted.
    pub fn missing(&self) -> Vec<MissingRequirement> {
        let mut missing: Vec<MissingRequirement> = self
            .graph
            .edge_references()
            .filter(|e| !self.graph[e.target()].known)
            .map(|e| MissingRequirement {
                language: self.graph[e.source()].id.clone(),
                requirement: self.graph[e.target()].id.clone(),
            })
            .collect();
        missing.sort();
        missing
    }
}
