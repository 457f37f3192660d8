//! Test fixture generators for integration tests.
#![allow(dead_code)]

use super::mock::MockProvider;
use typegrid::domain::type_ref::{TypeRef, TypeShape};

pub fn class(name: &str, namespace: &str) -> TypeRef {
    TypeRef::new(name, Some(namespace), false)
}

pub fn interface(name: &str, namespace: &str) -> TypeRef {
    TypeRef::new(name, Some(namespace), true)
}

pub fn plain(id: &str) -> TypeShape {
    TypeShape::Plain(id.to_string())
}

pub fn generic(args: Vec<TypeShape>) -> TypeShape {
    TypeShape::Generic(args)
}

pub fn array_of(element: TypeShape) -> TypeShape {
    TypeShape::ArrayOf(Box::new(element))
}

/// A depends on B, both in namespace "X"; B has no members.
pub fn provider_simple() -> MockProvider {
    MockProvider::new()
        .with_type(class("A", "X"), vec![plain("X.B")])
        .with_type(class("B", "X"), vec![])
}

/// Two namespaces of four mutually independent types each.
pub fn provider_two_namespaces() -> MockProvider {
    let mut provider = MockProvider::new();
    for ns in ["Alpha", "Beta"] {
        for i in 0..4 {
            provider = provider.with_type(class(&format!("T{i}"), ns), vec![]);
        }
    }
    provider
}

/// Two distinct types both named "Foo", plus a type depending on one of them.
pub fn provider_name_collision() -> MockProvider {
    MockProvider::new()
        .with_type(class("Foo", "X"), vec![])
        .with_type(class("Foo", "Y"), vec![])
        .with_type(class("User", "X"), vec![plain("Y.Foo")])
}

/// A cycle: A -> B -> C -> A, all in one namespace.
pub fn provider_cycle() -> MockProvider {
    MockProvider::new()
        .with_type(class("A", "Ring"), vec![plain("Ring.B")])
        .with_type(class("B", "Ring"), vec![plain("Ring.C")])
        .with_type(class("C", "Ring"), vec![plain("Ring.A")])
}

/// Generic and array member shapes wrapping in-scope types.
pub fn provider_wrapped_members() -> MockProvider {
    MockProvider::new()
        .with_type(
            class("Registry", "Core"),
            vec![
                generic(vec![plain("Core.Entry")]),
                array_of(plain("Core.Slot")),
            ],
        )
        .with_type(class("Entry", "Core"), vec![])
        .with_type(class("Slot", "Core"), vec![])
}
