use crate::domain::ports::TypeMetadataProvider;
use crate::domain::scope::CandidateSet;
use crate::domain::type_ref::{TypeId, TypeRef, TypeShape};
use std::collections::HashSet;

/// Computes the restricted dependency set of one type: every in-candidate
/// type reachable from its member-signature shapes, the type itself always
/// excluded.
///
/// Result order is first-seen over the provider's fixed member enumeration,
/// so output slots line up with member declaration order and repeated passes
/// are reproducible.
pub fn extract(
    type_ref: &TypeRef,
    candidates: &CandidateSet,
    provider: &dyn TypeMetadataProvider,
) -> Vec<TypeId> {
    let mut deps = Vec::new();
    let mut seen = HashSet::new();

    for shape in provider.member_shapes(&type_ref.id) {
        collect(&shape, candidates, &mut deps, &mut seen);
    }

    deps.retain(|dep| dep != &type_ref.id);
    deps
}

fn collect(
    shape: &TypeShape,
    candidates: &CandidateSet,
    deps: &mut Vec<TypeId>,
    seen: &mut HashSet<TypeId>,
) {
    match shape {
        TypeShape::Plain(id) => {
            if candidates.contains(id) && seen.insert(id.clone()) {
                deps.push(id.clone());
            }
        }
        TypeShape::Generic(args) => {
            for arg in args {
                collect(arg, candidates, deps, seen);
            }
        }
        TypeShape::ArrayOf(element) => {
            collect(element, candidates, deps, seen);
        }
    }
}
