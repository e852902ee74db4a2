//! Process-level edge resolution.
//!
//! The backend records dependencies at operation granularity. The rendered
//! diagram shows one node per process, so every operation edge has to be
//! translated through the operation→process index and the result cleaned up:
//! edges that collapse into a single process, edges touching operations the
//! current run never loaded, and edges leaving the rendered node set are all
//! dropped, and parallel edges between the same process pair collapse to
//! one.
//!
//! Nothing in this module fails. A malformed or stale backend record
//! degrades the diagram by one edge instead of aborting it; reporting the
//! omission is the calling layer's concern.

use crate::graph::{GraphEdge, GraphNode, PortLink};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Resolves operation-level edges into a deduplicated, self-loop-free,
/// port-annotated process-level edge set.
///
/// The two lookup indexes are built once at construction and reused across
/// [`resolve`](EdgeResolver::resolve) calls.
pub struct EdgeResolver {
    operation_to_process: AHashMap<String, String>,
    port_lookup: AHashMap<String, (String, String)>,
}

impl EdgeResolver {
    /// Builds the resolver's indexes from normalized operation nodes and
    /// port links.
    ///
    /// Operations without an owning process contribute nothing to the
    /// index. When several links connect the same process pair, the last
    /// one indexed supplies the port annotation for that pair's single
    /// rendered edge.
    pub fn new(operations: &[GraphNode], links: &[PortLink]) -> Self {
        let operation_to_process = operations
            .iter()
            .filter_map(|op| {
                op.process_id
                    .as_ref()
                    .map(|process| (op.id.clone(), process.clone()))
            })
            .collect();

        let mut port_lookup = AHashMap::new();
        for link in links {
            port_lookup.insert(
                pair_key(&link.source, &link.target),
                (link.source_port.clone(), link.target_port.clone()),
            );
        }

        Self {
            operation_to_process,
            port_lookup,
        }
    }

    /// Translates `operation_edges` to process granularity, keeping only
    /// edges whose endpoints both resolve to distinct members of
    /// `process_ids`.
    ///
    /// Output order is the first-seen order of each surviving process pair,
    /// so identical inputs always produce identical outputs.
    pub fn resolve(
        &self,
        operation_edges: &[GraphEdge],
        process_ids: &AHashSet<String>,
    ) -> Vec<GraphEdge> {
        operation_edges
            .iter()
            .filter_map(|edge| {
                let from = self.operation_to_process.get(&edge.source)?;
                let to = self.operation_to_process.get(&edge.target)?;
                if from == to {
                    return None;
                }
                if !process_ids.contains(from) || !process_ids.contains(to) {
                    return None;
                }
                Some((from.as_str(), to.as_str()))
            })
            .unique()
            .map(|(from, to)| {
                let mut edge = GraphEdge::between(from, to);
                if let Some((source_port, target_port)) = self.port_lookup.get(&pair_key(from, to))
                {
                    edge.source_port = Some(source_port.clone());
                    edge.target_port = Some(target_port.clone());
                }
                edge
            })
            .collect()
    }

    /// Number of operations the resolver can translate.
    pub fn indexed_operations(&self) -> usize {
        self.operation_to_process.len()
    }
}

fn pair_key(from: &str, to: &str) -> String {
    format!("{}-{}", from, to)
}

/// One-shot convenience over [`EdgeResolver`] for callers that resolve a
/// single edge set.
pub fn resolve_process_edges(
    operations: &[GraphNode],
    operation_edges: &[GraphEdge],
    process_ids: &AHashSet<String>,
    links: &[PortLink],
) -> Vec<GraphEdge> {
    EdgeResolver::new(operations, links).resolve(operation_edges, process_ids)
}
