//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::Result;
use typegrid::domain::ports::{ScopeResolver, TypeMetadataProvider};
use typegrid::domain::scope::CandidateSet;
use typegrid::domain::type_ref::{TypeRef, TypeShape};

/// In-memory provider: a fixed type universe plus per-type member shapes.
/// Scope resolution filters the universe by namespace; an empty scope string
/// selects everything.
pub struct MockProvider {
    pub types: Vec<TypeRef>,
    pub shapes: HashMap<String, Vec<TypeShape>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            types: Vec::new(),
            shapes: HashMap::new(),
        }
    }

    pub fn with_type(mut self, type_ref: TypeRef, members: Vec<TypeShape>) -> Self {
        self.shapes.insert(type_ref.id.clone(), members);
        self.types.push(type_ref);
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMetadataProvider for MockProvider {
    fn all_known_types(&self) -> Vec<TypeRef> {
        self.types.clone()
    }

    fn member_shapes(&self, id: &str) -> Vec<TypeShape> {
        self.shapes.get(id).cloned().unwrap_or_default()
    }
}

impl ScopeResolver for MockProvider {
    fn types_in_scope(&self, scope: &str) -> Result<CandidateSet> {
        Ok(self
            .types
            .iter()
            .filter(|t| scope.is_empty() || t.namespace.as_deref() == Some(scope))
            .cloned()
            .collect())
    }
}
