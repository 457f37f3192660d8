use crate::domain::extractor::extract;
use crate::domain::graph::DependencyGraph;
use crate::domain::ports::TypeMetadataProvider;
use crate::domain::scope::CandidateSet;

/// Graph builder - Domain Service for constructing a DependencyGraph from a
/// resolved scope.
pub struct GraphBuilder<'a> {
    provider: &'a dyn TypeMetadataProvider,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(provider: &'a dyn TypeMetadataProvider) -> Self {
        Self { provider }
    }

    /// Two-pass build: allocate a node per scoped type, then extract each
    /// type's dependencies against the same scope. An empty scope yields an
    /// empty graph.
    pub fn build(&self, scope: &CandidateSet) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        // Pass 1: node allocation
        for type_ref in scope.iter() {
            graph.add_type(type_ref.clone());
        }

        // Pass 2: edge wiring; in-degrees accumulate as edges land
        for type_ref in scope.iter() {
            let deps = extract(type_ref, scope, self.provider);
            graph.add_dependencies(&type_ref.id, deps);
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::type_ref::{TypeRef, TypeShape};
    use std::collections::HashMap;

    struct MapProvider {
        shapes: HashMap<String, Vec<TypeShape>>,
    }

    impl TypeMetadataProvider for MapProvider {
        fn all_known_types(&self) -> Vec<TypeRef> {
            Vec::new()
        }

        fn member_shapes(&self, id: &str) -> Vec<TypeShape> {
            self.shapes.get(id).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn build_restricts_to_scope_and_counts_degrees() {
        let mut shapes = HashMap::new();
        shapes.insert(
            "A".to_string(),
            vec![
                TypeShape::Plain("B".to_string()),
                TypeShape::Plain("Outside".to_string()),
            ],
        );
        let provider = MapProvider { shapes };

        let scope: CandidateSet = [("A", false), ("B", false)]
            .iter()
            .map(|(n, i)| TypeRef::new(*n, None, *i))
            .collect();

        let graph = GraphBuilder::new(&provider).build(&scope);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.dependencies_of("A"), ["B"]);
        assert_eq!(graph.out_degree("B"), 0);
        assert_eq!(graph.in_degree("B"), 1);
    }

    #[test]
    fn empty_scope_builds_empty_graph() {
        let provider = MapProvider {
            shapes: HashMap::new(),
        };
        let graph = GraphBuilder::new(&provider).build(&CandidateSet::new());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
