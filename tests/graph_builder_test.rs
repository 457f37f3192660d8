//! GraphBuilder integration tests using the mock provider and fixtures.

mod common;

use common::fixtures::{
    provider_cycle, provider_simple, provider_two_namespaces, provider_wrapped_members,
};
use typegrid::domain::builder::GraphBuilder;
use typegrid::domain::ports::ScopeResolver;
use typegrid::domain::scope::CandidateSet;

#[test]
fn test_simple_dependency_graph() {
    let provider = provider_simple();
    let scope = provider.types_in_scope("X").unwrap();
    let graph = GraphBuilder::new(&provider).build(&scope);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dependencies_of("X.A"), ["X.B"]);
    assert!(graph.dependencies_of("X.B").is_empty());
    assert_eq!(graph.out_degree("X.A"), 1);
    assert_eq!(graph.in_degree("X.B"), 1);
}

#[test]
fn test_empty_scope_is_terminal_not_an_error() {
    let provider = provider_simple();
    let graph = GraphBuilder::new(&provider).build(&CandidateSet::new());
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_cycles_are_tolerated() {
    let provider = provider_cycle();
    let scope = provider.types_in_scope("Ring").unwrap();
    let graph = GraphBuilder::new(&provider).build(&scope);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    for id in ["Ring.A", "Ring.B", "Ring.C"] {
        assert_eq!(graph.in_degree(id), 1);
        assert_eq!(graph.out_degree(id), 1);
    }
}

#[test]
fn test_scope_restriction_drops_cross_namespace_edges() {
    let provider = provider_two_namespaces();
    let scope = provider.types_in_scope("Alpha").unwrap();
    let graph = GraphBuilder::new(&provider).build(&scope);

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 0);
    for type_ref in graph.types() {
        assert_eq!(type_ref.namespace.as_deref(), Some("Alpha"));
    }
}

#[test]
fn test_generic_and_array_members_unwrap_to_dependencies() {
    let provider = provider_wrapped_members();
    let scope = provider.types_in_scope("Core").unwrap();
    let graph = GraphBuilder::new(&provider).build(&scope);

    assert_eq!(graph.dependencies_of("Core.Registry"), ["Core.Entry", "Core.Slot"]);
    assert_eq!(graph.in_degree("Core.Entry"), 1);
    assert_eq!(graph.in_degree("Core.Slot"), 1);
}

#[test]
fn test_every_dependency_stays_within_scope() {
    for provider in [
        provider_simple(),
        provider_cycle(),
        provider_wrapped_members(),
    ] {
        let scope = provider.types_in_scope("").unwrap();
        let graph = GraphBuilder::new(&provider).build(&scope);
        for type_ref in graph.types() {
            for dep in graph.dependencies_of(&type_ref.id) {
                assert!(scope.contains(dep), "{dep} escaped scope");
                assert_ne!(dep, &type_ref.id, "self-edge on {dep}");
            }
        }
    }
}
