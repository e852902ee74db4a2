//! The renderer hand-off: positioned nodes, resolved edges, and selection
//! state merged into one structure.
//!
//! Selection is an explicit context object owned by the caller. The merge
//! is a pure function of its inputs; nothing here holds or mutates UI
//! state.

use crate::graph::{GraphEdge, GraphNode, PlacedNode, Point};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The caller-owned selection context. At most one of the two is normally
/// set, since selecting a node clears the edge selection and vice versa,
/// but the merge does not enforce that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    pub node_id: Option<String>,
    pub edge_id: Option<String>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn node(id: impl Into<String>) -> Self {
        Self {
            node_id: Some(id.into()),
            edge_id: None,
        }
    }

    pub fn edge(id: impl Into<String>) -> Self {
        Self {
            node_id: None,
            edge_id: Some(id.into()),
        }
    }
}

/// A canonical node augmented with its rendered position and selection
/// flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewNode {
    pub node: GraphNode,
    pub position: Point,
    pub selected: bool,
}

/// The single structure the rendering collaborator consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphViewModel {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<GraphEdge>,
    pub selection: Selection,
}

/// Merges canonical nodes with their layout positions, the resolved edge
/// set, and the selection context.
///
/// Nodes keep their input order. A node the layout did not place (which the
/// baseline engine never produces) falls back to the origin rather than
/// being dropped.
pub fn merge(
    nodes: &[GraphNode],
    placed: &[PlacedNode],
    edges: Vec<GraphEdge>,
    selection: &Selection,
) -> GraphViewModel {
    let positions: AHashMap<&str, Point> = placed
        .iter()
        .map(|p| (p.id.as_str(), p.position))
        .collect();

    let nodes = nodes
        .iter()
        .map(|node| ViewNode {
            node: node.clone(),
            position: positions
                .get(node.id.as_str())
                .copied()
                .unwrap_or(Point::ORIGIN),
            selected: selection.node_id.as_deref() == Some(node.id.as_str()),
        })
        .collect();

    GraphViewModel {
        nodes,
        edges,
        selection: selection.clone(),
    }
}
