use crate::domain::type_ref::{TypeId, TypeRef};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Dependency graph for one pass - the core data structure.
///
/// Rebuilt wholesale on every scope change, never mutated incrementally.
/// Every key and every dependency value belongs to the pass's candidate set.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// The directed graph of types; an edge means "source references target".
    pub graph: DiGraph<TypeRef, ()>,

    /// Mapping from type id to node index.
    id_to_node: HashMap<TypeId, NodeIndex>,

    /// Ordered adjacency per type id. petgraph stores the same edges but
    /// enumerates them most-recent-first; slot indices need declaration order.
    deps: HashMap<TypeId, Vec<TypeId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, type_ref: TypeRef) -> NodeIndex {
        let id = type_ref.id.clone();
        let idx = self.graph.add_node(type_ref);
        self.id_to_node.insert(id, idx);
        idx
    }

    /// Records the ordered dependency list of `source` and wires the edges.
    /// Targets must already be present as nodes.
    pub fn add_dependencies(&mut self, source: &str, targets: Vec<TypeId>) {
        if let Some(&source_idx) = self.id_to_node.get(source) {
            for target in &targets {
                if let Some(&target_idx) = self.id_to_node.get(target) {
                    self.graph.add_edge(source_idx, target_idx, ());
                }
            }
            self.deps.insert(source.to_string(), targets);
        }
    }

    pub fn node_by_id(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_node.get(id).copied()
    }

    pub fn type_ref(&self, idx: NodeIndex) -> &TypeRef {
        &self.graph[idx]
    }

    /// All types in insertion (candidate-set) order.
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Ordered dependencies of one type; empty for unknown ids.
    pub fn dependencies_of(&self, id: &str) -> &[TypeId] {
        self.deps.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.dependencies_of(id).len()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.id_to_node
            .get(id)
            .map(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
