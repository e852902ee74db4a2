//! Layered, top-down graph layout.
//!
//! [`LayeredLayout`] is the baseline engine: multi-root BFS leveling,
//! stable per-level ordering, rows centered around x = 0. It is
//! deliberately simple (no crossing minimization, no dummy nodes) and
//! deterministic: identical inputs always yield identical geometry.
//!
//! [`LayoutProvider`] is the substitution seam. A more sophisticated
//! rank/order-minimizing engine can be dropped in behind the same contract
//! (top-to-bottom ranks consistent with edge direction, deterministic
//! horizontal ordering, same edgeless fallback) without touching any other
//! component.

mod leveling;

use crate::graph::{GraphEdge, PlacedNode, Point};
use ahash::AHashMap;
use leveling::assign_levels;

/// X coordinate of every node in the edgeless fallback column.
pub const FALLBACK_X: f64 = 100.0;
/// Vertical step between nodes in the edgeless fallback column.
pub const ROW_HEIGHT: f64 = 150.0;
/// Horizontal distance between adjacent nodes in one level.
pub const HORIZONTAL_SPACING: f64 = 260.0;
/// Vertical distance between adjacent levels.
pub const VERTICAL_SPACING: f64 = 200.0;
/// Default rendered node extent, exposed for providers that are
/// size-aware.
pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 100.0;

/// Layout input: a node id plus the extent a size-aware provider may use.
/// The baseline engine places nodes on a fixed grid and ignores the size.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
        }
    }
}

/// The layout contract. Implementations must return exactly one
/// [`PlacedNode`] per input node, in input order, and must produce
/// identical output for identical input.
pub trait LayoutProvider {
    fn layout(&self, nodes: &[LayoutNode], edges: &[GraphEdge]) -> Vec<PlacedNode>;
}

/// Baseline layered layout engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredLayout;

impl LayeredLayout {
    /// Assigns every node a position.
    ///
    /// With no edges there is nothing to layer against, so nodes are placed
    /// in input order in a single fixed column at
    /// `(FALLBACK_X, index * ROW_HEIGHT)`.
    ///
    /// Otherwise nodes are leveled by BFS distance from the in-degree-0
    /// roots, grouped per level in input order, and each level's row is
    /// centered around x = 0:
    /// `x = (index_in_level - (count - 1) / 2) * HORIZONTAL_SPACING`,
    /// `y = level * VERTICAL_SPACING`.
    pub fn layout(&self, nodes: &[LayoutNode], edges: &[GraphEdge]) -> Vec<PlacedNode> {
        if edges.is_empty() {
            return nodes
                .iter()
                .enumerate()
                .map(|(index, node)| PlacedNode {
                    id: node.id.clone(),
                    position: Point::new(FALLBACK_X, index as f64 * ROW_HEIGHT),
                })
                .collect();
        }

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let levels = assign_levels(&ids, edges);

        // Walk nodes in input order so the index within each level is the
        // stable tie-break.
        let level_count = levels.values().copied().max().unwrap_or(0) + 1;
        let mut index_in_level: AHashMap<&str, usize> = AHashMap::new();
        let mut row_len: Vec<usize> = vec![0; level_count];
        for &id in &ids {
            let level = levels[id];
            index_in_level.insert(id, row_len[level]);
            row_len[level] += 1;
        }

        nodes
            .iter()
            .map(|node| {
                let level = levels[node.id.as_str()];
                let index = index_in_level[node.id.as_str()];
                let count = row_len[level];
                let x = (index as f64 - (count as f64 - 1.0) / 2.0) * HORIZONTAL_SPACING;
                let y = level as f64 * VERTICAL_SPACING;
                PlacedNode {
                    id: node.id.clone(),
                    position: Point::new(x, y),
                }
            })
            .collect()
    }

    /// Level assignment without coordinates, for callers that only need the
    /// vertical tiers.
    pub fn levels(&self, nodes: &[LayoutNode], edges: &[GraphEdge]) -> Vec<(String, usize)> {
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let levels = assign_levels(&ids, edges);
        nodes
            .iter()
            .map(|n| (n.id.clone(), levels[n.id.as_str()]))
            .collect()
    }
}

impl LayoutProvider for LayeredLayout {
    fn layout(&self, nodes: &[LayoutNode], edges: &[GraphEdge]) -> Vec<PlacedNode> {
        LayeredLayout::layout(self, nodes, edges)
    }
}
