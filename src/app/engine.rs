use crate::app::dto::*;
use crate::domain::builder::GraphBuilder;
use crate::domain::edge::{self, AbstractEdge};
use crate::domain::graph::DependencyGraph;
use crate::domain::grouper;
use crate::domain::layout::{self, GroupLayout};
use crate::domain::ports::{ScopeResolver, TypeMetadataProvider};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// One completed pass: graph, placed groups and (optionally) edges. Owned by
/// the host; the engine keeps no state between passes.
#[derive(Debug)]
pub struct LayoutPass {
    pub scope: String,
    pub graph: DependencyGraph,
    pub groups: Vec<GroupLayout>,
    pub edges: Vec<AbstractEdge>,
}

impl LayoutPass {
    /// Re-resolves edges against the existing positions, e.g. after a host
    /// toggles dependency display back on. Geometry is untouched.
    pub fn resolve_edges(&mut self) {
        self.edges = edge::resolve(&self.graph, &self.groups);
    }
}

/// The single entry point the core exposes to its host: resolves a scope,
/// builds the dependency graph, partitions it into namespace groups, grids
/// them out and resolves edges.
pub struct LayoutEngine {
    provider: Arc<dyn TypeMetadataProvider>,
    resolver: Arc<dyn ScopeResolver>,
}

impl LayoutEngine {
    pub fn new(provider: Arc<dyn TypeMetadataProvider>, resolver: Arc<dyn ScopeResolver>) -> Self {
        Self { provider, resolver }
    }

    /// Full pass with domain-level results, for hosts that keep the pass
    /// around (edge toggling, hit testing).
    pub fn compute_pass(&self, scope: &str, config: &LayoutConfig) -> Result<LayoutPass> {
        let candidates = self.resolver.types_in_scope(scope)?;
        debug!(scope, candidates = candidates.len(), "scope resolved");

        let graph = GraphBuilder::new(self.provider.as_ref()).build(&candidates);
        let groups = grouper::group(&candidates);
        let placed = layout::layout(&groups, &graph, config.offset);

        let edges = if config.show_dependency {
            edge::resolve(&graph, &placed)
        } else {
            Vec::new()
        };

        info!(
            scope,
            nodes = graph.node_count(),
            groups = placed.len(),
            edges = edges.len(),
            "layout pass complete"
        );

        Ok(LayoutPass {
            scope: scope.to_string(),
            graph,
            groups: placed,
            edges,
        })
    }

    /// Serializable form of a pass for hosts that render from plain data.
    pub fn compute_layout(&self, scope: &str, config: &LayoutConfig) -> Result<LayoutResponse> {
        let pass = self.compute_pass(scope, config)?;
        Ok(to_response(&pass))
    }
}

pub fn to_response(pass: &LayoutPass) -> LayoutResponse {
    let groups: Vec<GroupDto> = pass
        .groups
        .iter()
        .map(|g| GroupDto {
            title: g.key.title().to_string(),
            cols: g.cols,
            rows: g.rows,
            position: point_dto(g.origin),
            size: size_dto(g.bounds),
            nodes: g
                .nodes
                .iter()
                .map(|n| NodeDto {
                    id: n.type_ref.id.clone(),
                    name: n.type_ref.name.clone(),
                    namespace: n.type_ref.namespace.clone(),
                    is_interface: n.type_ref.is_interface,
                    position: point_dto(n.position),
                    size: size_dto(n.size),
                })
                .collect(),
        })
        .collect();

    let edges = pass
        .edges
        .iter()
        .map(|e| EdgeDto {
            source: e.source.clone(),
            source_slot: e.source_slot,
            target: e.target.clone(),
            target_is_interface: pass
                .graph
                .node_by_id(&e.target)
                .map(|idx| pass.graph.type_ref(idx).is_interface)
                .unwrap_or(false),
        })
        .collect();

    LayoutResponse {
        scope: pass.scope.clone(),
        node_count: pass.graph.node_count(),
        groups,
        edges,
    }
}

fn point_dto(p: layout::Point) -> PointDto {
    PointDto { x: p.x, y: p.y }
}

fn size_dto(s: layout::Size) -> SizeDto {
    SizeDto {
        width: s.width,
        height: s.height,
    }
}
