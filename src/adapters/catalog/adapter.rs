use crate::domain::ports::{ScopeResolver, TypeMetadataProvider};
use crate::domain::scope::CandidateSet;
use crate::domain::type_ref::{TypeId, TypeRef, TypeShape};
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Program-unit name prefixes treated as platform/framework-owned and
/// excluded from the type universe.
pub const DEFAULT_IGNORED_PREFIXES: &[&str] = &[
    "System",
    "mscorlib",
    "netstandard",
    "Microsoft.",
    "Mono.",
];

/// One type entry in a catalog file. Catalogs are produced ahead of time by
/// whatever introspection the source language offers; classes and interfaces
/// only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogType {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub is_interface: bool,
    /// Nested types are never part of a resolved scope.
    #[serde(default)]
    pub is_nested: bool,
    /// Source file path; scopes are path prefixes over it.
    pub path: String,
    /// Owning program unit (assembly/module), if known.
    #[serde(default)]
    pub assembly: Option<String>,
    /// Member-signature shapes in declaration order.
    #[serde(default)]
    pub members: Vec<TypeShape>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeCatalog {
    pub types: Vec<CatalogType>,
}

/// Catalog-backed implementation of both host ports: the type universe from
/// a JSON file, scope resolution by path prefix.
#[derive(Debug)]
pub struct CatalogAdapter {
    types: Vec<CatalogType>,
    refs_by_id: HashMap<TypeId, TypeRef>,
    members_by_id: HashMap<TypeId, Vec<TypeShape>>,
    ignored_prefixes: Vec<String>,
}

impl CatalogAdapter {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read type catalog: {}", path.display()))?;
        let catalog: TypeCatalog =
            serde_json::from_str(&content).context("Failed to parse type catalog JSON")?;
        Ok(Self::from_catalog(catalog))
    }

    pub fn from_catalog(catalog: TypeCatalog) -> Self {
        let mut refs_by_id = HashMap::new();
        let mut members_by_id = HashMap::new();

        for t in &catalog.types {
            let type_ref = TypeRef::new(t.name.clone(), t.namespace.as_deref(), t.is_interface);
            members_by_id
                .entry(type_ref.id.clone())
                .or_insert_with(|| t.members.clone());
            refs_by_id.entry(type_ref.id.clone()).or_insert(type_ref);
        }

        Self {
            types: catalog.types,
            refs_by_id,
            members_by_id,
            ignored_prefixes: DEFAULT_IGNORED_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn with_ignored_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.ignored_prefixes = prefixes;
        self
    }

    fn is_ignored(&self, entry: &CatalogType) -> bool {
        entry.assembly.as_deref().is_some_and(|assembly| {
            self.ignored_prefixes
                .iter()
                .any(|prefix| assembly.starts_with(prefix))
        })
    }

    fn type_ref_for(&self, entry: &CatalogType) -> TypeRef {
        let probe = TypeRef::new(entry.name.clone(), entry.namespace.as_deref(), entry.is_interface);
        // first catalog entry per id wins, matching CandidateSet dedup
        self.refs_by_id.get(&probe.id).cloned().unwrap_or(probe)
    }
}

impl TypeMetadataProvider for CatalogAdapter {
    fn all_known_types(&self) -> Vec<TypeRef> {
        let mut set = CandidateSet::new();
        for entry in &self.types {
            if !self.is_ignored(entry) {
                set.insert(self.type_ref_for(entry));
            }
        }
        set.iter().cloned().collect()
    }

    fn member_shapes(&self, id: &str) -> Vec<TypeShape> {
        self.members_by_id.get(id).cloned().unwrap_or_default()
    }
}

impl ScopeResolver for CatalogAdapter {
    fn types_in_scope(&self, scope: &str) -> Result<CandidateSet> {
        let mut set = CandidateSet::new();
        for entry in &self.types {
            if entry.is_nested || self.is_ignored(entry) {
                continue;
            }
            if entry.path.starts_with(scope) {
                set.insert(self.type_ref_for(entry));
            }
        }
        Ok(set)
    }
}
