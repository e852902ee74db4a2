use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a dependency graph, ready for edge
/// resolution and layout. This is the target structure for any custom record
/// conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Canonical lifecycle state shared by operation- and process-granular
/// nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    NotStarted,
    Running,
    Completed,
    Error,
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeStatus::NotStarted => write!(f, "not started"),
            NodeStatus::Running => write!(f, "running"),
            NodeStatus::Completed => write!(f, "completed"),
            NodeStatus::Error => write!(f, "error"),
        }
    }
}

/// A single node in the canonical graph. Covers both granularities the
/// backend delivers: operation-level nodes carry `process_id`/`parent_id`,
/// process-level nodes carry `kind` and `ports`.
///
/// All identifiers are strings; the renderer requires string keys and the
/// normalizer coerces every numeric wire id exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub status: NodeStatus,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub process_id: Option<String>,
    /// `None` means "root operation". Never coerced to a sentinel string.
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub is_transport: bool,
    #[serde(default)]
    pub is_data: bool,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    #[serde(default)]
    pub storage_address: Option<String>,
    #[serde(default)]
    pub ports: Option<Ports>,
}

impl GraphNode {
    /// Minimal node with the given id and label; everything else defaulted.
    /// Mostly useful in tests and generators.
    pub fn bare(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            status: NodeStatus::NotStarted,
            kind: None,
            process_id: None,
            parent_id: None,
            is_transport: false,
            is_data: false,
            started_at: None,
            finished_at: None,
            storage_address: None,
            ports: None,
        }
    }
}

/// Input/output port partition of a process node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ports {
    pub input: Vec<Port>,
    pub output: Vec<Port>,
}

/// Named, typed connection point on a process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    pub name: String,
    pub data_type: String,
    #[serde(default)]
    pub connected_from: Option<String>,
    #[serde(default)]
    pub connected_to: Option<String>,
}

/// A directed edge in the canonical graph, optionally annotated with the
/// port pair that realizes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_port: Option<String>,
    #[serde(default)]
    pub target_port: Option<String>,
}

impl GraphEdge {
    /// Builds an edge between two endpoints with the canonical
    /// `"e{source}-{target}"` id and no port annotation.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e{}-{}", source, target),
            source,
            target,
            source_port: None,
            target_port: None,
        }
    }
}

/// A normalized connection record: one realized wire between two processes,
/// identified by string keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortLink {
    pub source: String,
    pub source_port: String,
    pub target: String,
    pub target_port: String,
}

/// A 2-D position in the renderer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The layout engine's output for a single node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedNode {
    pub id: String,
    pub position: Point,
}
