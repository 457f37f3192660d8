use crate::domain::scope::CandidateSet;
use crate::domain::type_ref::{TypeRef, TypeShape};
use anyhow::Result;

/// Type metadata source port (implemented by Infrastructure).
///
/// Supplies the full type universe and, per type, the structural references
/// appearing in its member signatures. How the shapes are obtained (AST
/// inspection, a symbol index, runtime reflection) is the adapter's concern;
/// the core only sees the already-classified shapes.
pub trait TypeMetadataProvider {
    /// Every known type, with platform/framework-owned program units already
    /// excluded by the adapter.
    fn all_known_types(&self) -> Vec<TypeRef>;

    /// Ordered member-signature shapes for one type: field and property
    /// types, constructor parameters, method parameters and return types, in
    /// a fixed enumeration order. Synthesized property accessors must not
    /// contribute separately. Unknown ids yield an empty list.
    fn member_shapes(&self, id: &str) -> Vec<TypeShape>;
}

/// Scope resolution port: narrows the type universe to the working set for
/// one pass (e.g. "all types under a folder"). An empty result is a valid
/// terminal state, not an error.
pub trait ScopeResolver {
    fn types_in_scope(&self, scope: &str) -> Result<CandidateSet>;
}
