use crate::domain::graph::DependencyGraph;
use crate::domain::grouper::{GroupKey, NamespaceGroup};
use crate::domain::rank::sorted_by_rank;
use crate::domain::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

/// Fixed node width.
pub const NODE_WIDTH: f32 = 260.0;
/// Node height floor; out-edges add to it.
pub const NODE_BASE_HEIGHT: f32 = 120.0;
/// Height added per outgoing dependency (one output slot each).
pub const NODE_HEIGHT_PER_EDGE: f32 = 26.0;
/// Top-left corner of the whole layout.
pub const ORIGIN_X: f32 = 100.0;
pub const ORIGIN_Y: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A placed type: final position and size, immutable for the rest of the pass.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub type_ref: TypeRef,
    pub position: Point,
    pub size: Size,
}

/// A placed namespace group: grid shape, cell size, bounds and the ordered
/// nodes inside it.
#[derive(Debug, Clone)]
pub struct GroupLayout {
    pub key: GroupKey,
    pub cols: usize,
    pub rows: usize,
    pub cell: Size,
    pub origin: Point,
    pub bounds: Size,
    pub nodes: Vec<LayoutNode>,
}

/// Grid shape for `n` items: `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`.
fn grid_shape(n: usize) -> (usize, usize) {
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);
    (cols, rows)
}

pub fn node_height(out_degree: usize) -> f32 {
    NODE_BASE_HEIGHT + out_degree as f32 * NODE_HEIGHT_PER_EDGE
}

struct PendingGroup {
    key: GroupKey,
    members: Vec<TypeRef>,
    cols: usize,
    rows: usize,
    cell: Size,
    bounds: Size,
}

/// Computes the two-level grid.
///
/// Each group's node grid sizes its cells from the tallest member plus the
/// spacing offset. The super-grid is uniform: every group occupies a cell
/// sized from the largest group bounds plus `2 * offset` padding, placed
/// row-major in grouper order. Members place row-major in (rank, name)
/// order, each centered in its cell to absorb height variance.
pub fn layout(
    groups: &[NamespaceGroup],
    graph: &DependencyGraph,
    offset: f32,
) -> Vec<GroupLayout> {
    let pending: Vec<PendingGroup> = groups
        .iter()
        .filter(|g| !g.members.is_empty())
        .map(|g| measure_group(g, graph, offset))
        .collect();

    if pending.is_empty() {
        return Vec::new();
    }

    let (group_cols, _group_rows) = grid_shape(pending.len());

    let max_group_width = pending.iter().map(|p| p.bounds.width).fold(0.0, f32::max);
    let max_group_height = pending.iter().map(|p| p.bounds.height).fold(0.0, f32::max);

    let cell_group_width = max_group_width + offset * 2.0;
    let cell_group_height = max_group_height + offset * 2.0;

    pending
        .into_iter()
        .enumerate()
        .map(|(group_index, p)| {
            let gcol = group_index % group_cols;
            let grow = group_index / group_cols;

            let origin = Point {
                x: ORIGIN_X + gcol as f32 * cell_group_width,
                y: ORIGIN_Y + grow as f32 * cell_group_height,
            };

            place_group(p, origin, graph)
        })
        .collect()
}

fn measure_group(group: &NamespaceGroup, graph: &DependencyGraph, offset: f32) -> PendingGroup {
    let count = group.members.len();
    let (cols, rows) = grid_shape(count);

    let max_node_height = group
        .members
        .iter()
        .map(|t| node_height(graph.out_degree(&t.id)))
        .fold(0.0, f32::max);

    let cell = Size {
        width: NODE_WIDTH + offset,
        height: max_node_height + offset,
    };
    let bounds = Size {
        width: cols as f32 * cell.width,
        height: rows as f32 * cell.height,
    };

    PendingGroup {
        key: group.key.clone(),
        members: group.members.clone(),
        cols,
        rows,
        cell,
        bounds,
    }
}

fn place_group(p: PendingGroup, origin: Point, graph: &DependencyGraph) -> GroupLayout {
    let ordered = sorted_by_rank(&p.members, graph);

    let nodes = ordered
        .into_iter()
        .enumerate()
        .map(|(i, type_ref)| {
            let col = i % p.cols;
            let row = i / p.cols;

            let cell_x = origin.x + col as f32 * p.cell.width;
            let cell_y = origin.y + row as f32 * p.cell.height;

            let height = node_height(graph.out_degree(&type_ref.id));

            // center within the cell
            let position = Point {
                x: cell_x + (p.cell.width - NODE_WIDTH) * 0.5,
                y: cell_y + (p.cell.height - height) * 0.5,
            };

            LayoutNode {
                type_ref,
                position,
                size: Size {
                    width: NODE_WIDTH,
                    height,
                },
            }
        })
        .collect();

    GroupLayout {
        key: p.key,
        cols: p.cols,
        rows: p.rows,
        cell: p.cell,
        origin,
        bounds: p.bounds,
        nodes,
    }
}
