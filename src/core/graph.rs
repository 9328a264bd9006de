use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One resolved module identity: a project file or an external package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleNode {
    /// Canonical key: absolute file path for local files, verbatim specifier
    /// for external packages.
    pub path: String,
    /// Keys this module imports.
    pub depends_on: BTreeSet<String>,
    /// Keys that import this module.
    pub included_by: BTreeSet<String>,
    /// Subset of `depends_on` for which resolution never materialized a node.
    pub unresolved: BTreeSet<String>,
    /// True when the key does not map to a file inside the project root.
    pub is_external: bool,
}

impl ModuleNode {
    fn file(path: String) -> Self {
        Self {
            path,
            depends_on: BTreeSet::new(),
            included_by: BTreeSet::new(),
            unresolved: BTreeSet::new(),
            is_external: false,
        }
    }

    fn external(specifier: String) -> Self {
        Self {
            is_external: true,
            ..Self::file(specifier)
        }
    }
}

/// The dependency graph: an owned arena mapping keys to nodes.
///
/// Edges live in the node sets. An edge whose target key has no node is kept
/// one-sided and listed in the source node's `unresolved` set; traversals
/// must not assume every `depends_on` key is present in the table.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleGraph {
    nodes: BTreeMap<String, ModuleNode>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file node. Returns false, leaving the first node untouched,
    /// when the key is already taken.
    pub fn insert_file(&mut self, key: &str) -> bool {
        if self.nodes.contains_key(key) {
            return false;
        }
        self.nodes
            .insert(key.to_string(), ModuleNode::file(key.to_string()));
        true
    }

    /// Synthesize an external package node if the key has none yet.
    pub fn ensure_external(&mut self, specifier: &str) {
        self.nodes
            .entry(specifier.to_string())
            .or_insert_with(|| ModuleNode::external(specifier.to_string()));
    }

    /// Record `source -> target`. Set inserts are idempotent and
    /// order-independent; the reverse entry is only written when a node
    /// exists at `target`, otherwise the edge is one-sided and marked
    /// unresolved on the source.
    pub fn record_dependency(&mut self, source: &str, target: &str) {
        let target_exists = self.nodes.contains_key(target);
        if let Some(node) = self.nodes.get_mut(source) {
            node.depends_on.insert(target.to_string());
            if !target_exists {
                node.unresolved.insert(target.to_string());
            }
        }
        if target_exists {
            if let Some(node) = self.nodes.get_mut(target) {
                node.included_by.insert(source.to_string());
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ModuleNode> {
        self.nodes.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.nodes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModuleNode)> {
        self.nodes.iter()
    }

    /// Export the materialized subgraph for petgraph traversals (cycle
    /// detection, topological ordering). Unresolved one-sided edges are
    /// skipped because petgraph requires both endpoints.
    pub fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::with_capacity(self.nodes.len());
        for key in self.nodes.keys() {
            indices.insert(key.clone(), graph.add_node(key.clone()));
        }
        for (key, node) in &self.nodes {
            for target in &node.depends_on {
                if let Some(&target_idx) = indices.get(target) {
                    graph.add_edge(indices[key], target_idx, ());
                }
            }
        }
        graph
    }
}
