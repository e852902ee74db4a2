//! Unit tests for canonical types, normalization, and error display.
mod common;
use common::*;
use haichi::error::SnapshotError;
use haichi::prelude::*;
use haichi::ui::{OperationStatus, ProcessStatus};

#[test]
fn test_node_status_display() {
    assert_eq!(format!("{}", NodeStatus::NotStarted), "not started");
    assert_eq!(format!("{}", NodeStatus::Running), "running");
    assert_eq!(format!("{}", NodeStatus::Completed), "completed");
    assert_eq!(format!("{}", NodeStatus::Error), "error");
}

#[test]
fn test_operation_status_wire_format() {
    let status: OperationStatus =
        serde_json::from_str("\"not started\"").expect("two-word status should parse");
    assert_eq!(status, OperationStatus::NotStarted);

    let status: OperationStatus = serde_json::from_str("\"error\"").expect("should parse");
    assert_eq!(status, OperationStatus::Error);
}

#[test]
fn test_edge_id_format() {
    let edge = GraphEdge::between("5", "7");
    assert_eq!(edge.id, "e5-7");
    assert_eq!(edge.source, "5");
    assert_eq!(edge.target, "7");
    assert!(edge.source_port.is_none());
    assert!(edge.target_port.is_none());
}

#[test]
fn test_normalize_coerces_ids_to_strings() {
    let operations = vec![
        operation(10, 1, OperationStatus::Completed),
        operation(11, 2, OperationStatus::Running),
    ];
    let edge_records = vec![edge_record(1, 10, 11)];

    let (nodes, edges) = normalize(&operations, &edge_records);

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].id, "10");
    assert_eq!(nodes[0].process_id.as_deref(), Some("1"));
    assert_eq!(nodes[1].status, NodeStatus::Running);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].id, "e10-11");
    assert_eq!(edges[0].source, "10");
    assert_eq!(edges[0].target, "11");
}

#[test]
fn test_normalize_preserves_null_parent() {
    let mut with_parent = operation(11, 1, OperationStatus::Completed);
    with_parent.parent_id = Some(10);
    let without_parent = operation(10, 1, OperationStatus::Completed);

    let (nodes, _) = normalize(&[without_parent, with_parent], &[]);

    assert_eq!(nodes[0].parent_id, None);
    assert_eq!(nodes[1].parent_id.as_deref(), Some("10"));
}

#[test]
fn test_normalize_processes_folds_status() {
    let records = vec![
        process(1, "A", ProcessStatus::Pending),
        process(2, "B", ProcessStatus::Failed),
        process(3, "C", ProcessStatus::Completed),
    ];

    let nodes = normalize_processes(&records);

    assert_eq!(nodes[0].status, NodeStatus::NotStarted);
    assert_eq!(nodes[1].status, NodeStatus::Error);
    assert_eq!(nodes[2].status, NodeStatus::Completed);
    assert_eq!(nodes[0].kind.as_deref(), Some("compute"));
    assert!(nodes[0].ports.is_some());
}

#[test]
fn test_normalize_links() {
    let links = normalize_links(&[connection(1, 4, 5)]);

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].source, "4");
    assert_eq!(links[0].target, "5");
    assert_eq!(links[0].source_port, "p4-out");
    assert_eq!(links[0].target_port, "p5-in");
}

#[test]
fn test_into_graph_for_run_records() {
    let graph = create_chain_run()
        .into_graph()
        .expect("record conversion should succeed");

    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(graph.edges.len(), 4);
    assert!(graph.nodes.iter().all(|n| n.process_id.is_some()));
}

#[test]
fn test_error_display() {
    let err = GraphConversionError::ValidationError("missing node list".to_string());
    assert!(err.to_string().contains("missing node list"));

    let err = SnapshotError::Io {
        path: "out/view.bin".to_string(),
        message: "permission denied".to_string(),
    };
    assert!(err.to_string().contains("out/view.bin"));
    assert!(err.to_string().contains("permission denied"));

    let err = SnapshotError::Decode("unexpected end of input".to_string());
    assert!(err.to_string().contains("unexpected end of input"));
}
