use crate::domain::graph::DependencyGraph;
use crate::domain::type_ref::TypeRef;

/// Layout-order rank from degree thresholds: pure sources lead, pure sinks
/// trail. Isolated types share rank 1 with intermediates; they are not a
/// separate visual tier.
pub fn rank(in_degree: usize, out_degree: usize) -> u8 {
    match (in_degree > 0, out_degree > 0) {
        (false, true) => 0,
        (true, true) => 1,
        (true, false) => 2,
        (false, false) => 1,
    }
}

/// Orders group members by ascending rank, ties broken by ascending name.
/// Stable, so equal (rank, name) pairs keep their input order.
pub fn sorted_by_rank(members: &[TypeRef], graph: &DependencyGraph) -> Vec<TypeRef> {
    let mut sorted = members.to_vec();
    sorted.sort_by(|a, b| {
        let ra = rank(graph.in_degree(&a.id), graph.out_degree(&a.id));
        let rb = rank(graph.in_degree(&b.id), graph.out_degree(&b.id));
        ra.cmp(&rb).then_with(|| a.name.cmp(&b.name))
    });
    sorted
}
