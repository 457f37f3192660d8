use crate::domain::graph::DependencyGraph;
use crate::domain::layout::{GroupLayout, LayoutNode};
use crate::domain::type_ref::TypeId;
use std::collections::HashMap;

/// An edge request for the host renderer: the source's output slot (one per
/// ordered dependency) connecting to the target's single input slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractEdge {
    pub source: TypeId,
    /// Index of the dependency in the source's ordered dependency list.
    pub source_slot: usize,
    pub target: TypeId,
}

/// Short-name lookup over placed nodes, first registered wins.
///
/// Two in-scope types sharing a short name silently collide here: only the
/// first placed one is reachable as an edge target. Known fidelity tradeoff,
/// kept for behavioral compatibility with name-labeled output slots.
pub struct NameLookup {
    by_name: HashMap<String, TypeId>,
}

impl NameLookup {
    pub fn build<'a>(placed: impl Iterator<Item = &'a LayoutNode>) -> Self {
        let mut by_name = HashMap::new();
        for node in placed {
            by_name
                .entry(node.type_ref.name.clone())
                .or_insert_with(|| node.type_ref.id.clone());
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&TypeId> {
        self.by_name.get(name)
    }
}

/// Resolves every dependency of every placed node to an edge request.
/// Unresolvable names (target filtered out of scope) are skipped silently.
pub fn resolve(graph: &DependencyGraph, placed: &[GroupLayout]) -> Vec<AbstractEdge> {
    let lookup = NameLookup::build(placed.iter().flat_map(|g| g.nodes.iter()));

    let mut edges = Vec::new();
    for group in placed {
        for node in &group.nodes {
            let source = &node.type_ref.id;
            for (slot, dep) in graph.dependencies_of(source).iter().enumerate() {
                let Some(dep_ref) = graph.node_by_id(dep).map(|idx| graph.type_ref(idx)) else {
                    continue;
                };
                if let Some(target) = lookup.get(&dep_ref.name) {
                    edges.push(AbstractEdge {
                        source: source.clone(),
                        source_slot: slot,
                        target: target.clone(),
                    });
                }
            }
        }
    }
    edges
}
