use serde::{Deserialize, Serialize};

/// Stable type identity: the fully-qualified name (`Namespace.Name`, or the
/// bare name for types in the default namespace).
pub type TypeId = String;

/// A type in the analyzed codebase, as supplied by the metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully-qualified name; unique within the type universe.
    pub id: TypeId,
    /// Short name, without namespace. Edge resolution keys on this.
    pub name: String,
    /// `None` (or empty in catalog input) means the default namespace.
    pub namespace: Option<String>,
    pub is_interface: bool,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, namespace: Option<&str>, is_interface: bool) -> Self {
        let name = name.into();
        let namespace = namespace.filter(|ns| !ns.is_empty()).map(String::from);
        let id = match &namespace {
            Some(ns) => format!("{ns}.{name}"),
            None => name.clone(),
        };
        Self {
            id,
            name,
            namespace,
            is_interface,
        }
    }
}

/// Structural classification of one type reference appearing in a member
/// signature. Decided once by the metadata provider so the extractor's
/// recursion stays language-neutral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// A direct reference to a named type.
    Plain(TypeId),
    /// A generic construction; only the arguments are candidate
    /// dependencies, never the construction itself.
    Generic(Vec<TypeShape>),
    /// An array/sequence shape; only the element is a candidate dependency.
    ArrayOf(Box<TypeShape>),
}
