//! Integration tests for Haichi
//!
//! End-to-end tests that verify the complete record-to-view pipeline works
//! together.
//!
mod common;
use common::*;
use haichi::prelude::*;

#[test]
fn test_process_view_composition() {
    let records = create_chain_run();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    let view = composer.compose_processes(&records.operations, &records.edges, &Selection::none());

    // One node per process, in record order.
    let ids: Vec<&str> = view.nodes.iter().map(|n| n.node.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    // The intra-process edge and the stale edge are gone; the chain stays.
    let edge_ids: Vec<&str> = view.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, vec!["e1-2", "e2-3"]);

    // Port annotations come from the connection records.
    assert_eq!(view.edges[0].source_port.as_deref(), Some("p1-out"));
    assert_eq!(view.edges[0].target_port.as_deref(), Some("p2-in"));

    // A 1 -> 2 -> 3 chain stacks vertically, one process per level.
    assert_eq!(view.nodes[0].position, Point::new(0.0, 0.0));
    assert_eq!(view.nodes[1].position, Point::new(0.0, VERTICAL_SPACING));
    assert_eq!(view.nodes[2].position, Point::new(0.0, 2.0 * VERTICAL_SPACING));
}

#[test]
fn test_operation_view_composition() {
    let records = create_chain_run();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    let view = composer.compose_operations(&records.operations, &records.edges, &Selection::none());

    // Operation granularity: every loaded operation appears, and no edge
    // filtering happens at this level.
    assert_eq!(view.nodes.len(), 4);
    assert_eq!(view.edges.len(), 4);
    assert_eq!(view.nodes[0].node.id, "10");
    assert_eq!(view.nodes[0].node.process_id.as_deref(), Some("1"));
}

#[test]
fn test_selection_marks_exactly_one_node() {
    let records = create_chain_run();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    let selection = Selection::node("2");
    let view = composer.compose_processes(&records.operations, &records.edges, &selection);

    let selected: Vec<&str> = view
        .nodes
        .iter()
        .filter(|n| n.selected)
        .map(|n| n.node.id.as_str())
        .collect();
    assert_eq!(selected, vec!["2"]);
    assert_eq!(view.selection.node_id.as_deref(), Some("2"));
    assert!(view.selection.edge_id.is_none());
}

#[test]
fn test_edge_selection_leaves_nodes_unselected() {
    let records = create_chain_run();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    let selection = Selection::edge("e1-2");
    let view = composer.compose_processes(&records.operations, &records.edges, &selection);

    assert!(view.nodes.iter().all(|n| !n.selected));
    assert_eq!(view.selection.edge_id.as_deref(), Some("e1-2"));
}

#[test]
fn test_composition_is_pure_and_repeatable() {
    let records = create_chain_run();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    let first = composer.compose_processes(&records.operations, &records.edges, &Selection::none());
    let second =
        composer.compose_processes(&records.operations, &records.edges, &Selection::none());

    let first_pos: Vec<(f64, f64)> = first
        .nodes
        .iter()
        .map(|n| (n.position.x, n.position.y))
        .collect();
    let second_pos: Vec<(f64, f64)> = second
        .nodes
        .iter()
        .map(|n| (n.position.x, n.position.y))
        .collect();
    assert_eq!(first_pos, second_pos);
    assert_eq!(first.edges.len(), second.edges.len());
}

#[test]
fn test_edgeless_run_uses_fallback_column() {
    let mut records = create_chain_run();
    records.edges.clear();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    let view = composer.compose_processes(&records.operations, &records.edges, &Selection::none());

    assert!(view.edges.is_empty());
    for (index, node) in view.nodes.iter().enumerate() {
        assert_eq!(node.position, Point::new(FALLBACK_X, index as f64 * ROW_HEIGHT));
    }
}

#[test]
fn test_snapshot_round_trip_through_bytes() {
    let records = create_chain_run();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);
    let view = composer.compose_processes(&records.operations, &records.edges, &Selection::none());

    let snapshot = GraphSnapshot::from_view(&view);
    let bytes = snapshot.to_bytes().expect("snapshot should encode");
    let restored = GraphSnapshot::from_bytes(&bytes).expect("snapshot should decode");

    assert_eq!(restored.nodes.len(), view.nodes.len());
    assert_eq!(restored.edges.len(), view.edges.len());
    assert_eq!(restored.nodes[1].node.label, "Filter");
    assert_eq!(restored.nodes[1].position, view.nodes[1].position);
    assert_eq!(restored.edges[0].source_port.as_deref(), Some("p1-out"));
}

#[test]
fn test_snapshot_rejects_garbage_bytes() {
    let result = GraphSnapshot::from_bytes(&[0xde, 0xad, 0xbe, 0xef]);
    assert!(result.is_err());
}

/// A deliberately trivial provider: every node at the origin.
struct OriginLayout;

impl LayoutProvider for OriginLayout {
    fn layout(&self, nodes: &[LayoutNode], _edges: &[GraphEdge]) -> Vec<PlacedNode> {
        nodes
            .iter()
            .map(|n| PlacedNode {
                id: n.id.clone(),
                position: Point::ORIGIN,
            })
            .collect()
    }
}

#[test]
fn test_composer_honors_substituted_layout_provider() {
    let records = create_chain_run();
    let composer = GraphComposer::builder(
        normalize_processes(&records.processes),
        normalize_links(&records.connections),
    )
    .with_layout(Box::new(OriginLayout))
    .build();

    let view = composer.compose_processes(&records.operations, &records.edges, &Selection::none());

    assert!(view.nodes.iter().all(|n| n.position == Point::ORIGIN));
    // Edge resolution is unaffected by the provider swap.
    assert_eq!(view.edges.len(), 2);
}

#[test]
fn test_mock_run_composes_cleanly() {
    let records = RunRecords::mock();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    let view = composer.compose_processes(&records.operations, &records.edges, &Selection::none());

    assert_eq!(view.nodes.len(), 3);
    assert_eq!(view.edges.len(), 2);
    assert!(view.nodes.iter().all(|n| n.node.ports.is_some()));
}
