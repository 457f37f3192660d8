use crate::domain::scope::CandidateSet;
use crate::domain::type_ref::TypeRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Namespace bucket key. The derived `Ord` puts the default namespace before
/// every named one, then named namespaces lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    Default,
    Named(String),
}

impl GroupKey {
    pub fn from_namespace(namespace: Option<&str>) -> Self {
        match namespace {
            Some(ns) if !ns.is_empty() => GroupKey::Named(ns.to_string()),
            _ => GroupKey::Default,
        }
    }

    /// Display title for hosts; the default namespace reads "Global".
    pub fn title(&self) -> &str {
        match self {
            GroupKey::Default => "Global",
            GroupKey::Named(ns) => ns,
        }
    }
}

/// One namespace bucket of the partition. Member order is settled later by
/// the rank classifier; the grouper only fixes group-to-group order.
#[derive(Debug, Clone)]
pub struct NamespaceGroup {
    pub key: GroupKey,
    pub members: Vec<TypeRef>,
}

/// Partitions the scope into ordered namespace groups. Every scoped type
/// lands in exactly one group; an empty scope yields an empty list.
pub fn group(scope: &CandidateSet) -> Vec<NamespaceGroup> {
    let mut buckets: BTreeMap<GroupKey, Vec<TypeRef>> = BTreeMap::new();

    for type_ref in scope.iter() {
        buckets
            .entry(GroupKey::from_namespace(type_ref.namespace.as_deref()))
            .or_default()
            .push(type_ref.clone());
    }

    buckets
        .into_iter()
        .map(|(key, members)| NamespaceGroup { key, members })
        .collect()
}
