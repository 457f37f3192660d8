use crate::domain::type_ref::{TypeId, TypeRef};
use std::collections::HashMap;

/// The working set of types for one layout pass: ordered, deduplicated by
/// id, created fresh per scope resolution and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    order: Vec<TypeRef>,
    by_id: HashMap<TypeId, usize>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a type unless its id is already present (first wins).
    pub fn insert(&mut self, type_ref: TypeRef) {
        if self.by_id.contains_key(&type_ref.id) {
            return;
        }
        self.by_id.insert(type_ref.id.clone(), self.order.len());
        self.order.push(type_ref);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&TypeRef> {
        self.by_id.get(id).map(|&i| &self.order[i])
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeRef> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<TypeRef> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = TypeRef>>(iter: I) -> Self {
        let mut set = Self::new();
        for t in iter {
            set.insert(t);
        }
        set
    }
}
