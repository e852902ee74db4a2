use crate::graph::GraphEdge;
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Assigns every node a level: its BFS distance from the nearest in-degree-0
/// root. The returned map is total over `node_ids`.
///
/// The traversal starts from all roots simultaneously, in input order, and
/// assigns each node's level exactly once. Because a node already processed
/// is never re-enqueued, a back-edge in cyclic input cannot cause
/// nontermination. Nodes unreachable from any root (possible only when the
/// input actually contains a cycle) fall back to level 0 instead of being
/// dropped, so the caller's node count is preserved.
pub(super) fn assign_levels(
    node_ids: &[&str],
    edges: &[GraphEdge],
) -> AHashMap<String, usize> {
    let known: AHashSet<&str> = node_ids.iter().copied().collect();

    let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();
    let mut in_degree: AHashMap<&str, usize> = AHashMap::new();
    for edge in edges {
        let (source, target) = (edge.source.as_str(), edge.target.as_str());
        if !known.contains(source) || !known.contains(target) {
            continue;
        }
        successors.entry(source).or_default().push(target);
        *in_degree.entry(target).or_insert(0) += 1;
    }

    let mut levels: AHashMap<String, usize> = AHashMap::new();
    let mut processed: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    for &id in node_ids {
        if in_degree.get(id).copied().unwrap_or(0) == 0 {
            levels.insert(id.to_string(), 0);
            processed.insert(id);
            queue.push_back(id);
        }
    }

    while let Some(current) = queue.pop_front() {
        let next_level = levels[current] + 1;
        if let Some(children) = successors.get(current) {
            for &child in children {
                if processed.insert(child) {
                    levels.insert(child.to_string(), next_level);
                    queue.push_back(child);
                }
            }
        }
    }

    for &id in node_ids {
        levels.entry(id.to_string()).or_insert(0);
    }

    levels
}
