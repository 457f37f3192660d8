use serde::{Deserialize, Serialize};

/// Configuration threaded into every layout pass; no implicit global state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Spacing between grid cells (and, doubled, around group cells).
    #[serde(default)]
    pub offset: f32,
    /// Whether to run the edge resolver at all.
    #[serde(default = "default_true")]
    pub show_dependency: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            show_dependency: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointDto {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizeDto {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: String,
    pub name: String,
    pub namespace: Option<String>,
    pub is_interface: bool,
    pub position: PointDto,
    pub size: SizeDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDto {
    pub title: String,
    pub cols: usize,
    pub rows: usize,
    pub position: PointDto,
    pub size: SizeDto,
    pub nodes: Vec<NodeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDto {
    pub source: String,
    pub source_slot: usize,
    pub target: String,
    /// Lets renderers style interface dependencies differently.
    pub target_is_interface: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub scope: String,
    pub node_count: usize,
    pub groups: Vec<GroupDto>,
    pub edges: Vec<EdgeDto>,
}
