//! Common test utilities for building run records and canonical graphs.
use haichi::prelude::*;
use haichi::ui::{OperationStatus, PortRecord, PortSet, ProcessStatus};

/// Builds a raw operation record with the given identity and status.
#[allow(dead_code)]
pub fn operation(id: i64, process_id: i64, status: OperationStatus) -> OperationRecord {
    OperationRecord {
        id,
        process_id,
        parent_id: None,
        name: format!("operation-{}", id),
        status,
        started_at: None,
        finished_at: None,
        storage_address: Some(format!("runs/7/op{}", id)),
        is_transport: false,
        is_data: false,
        log: None,
    }
}

/// Builds a raw operation-level edge record.
#[allow(dead_code)]
pub fn edge_record(id: i64, from_id: i64, to_id: i64) -> EdgeRecord {
    EdgeRecord {
        id,
        run_id: Some(7),
        from_id,
        to_id,
    }
}

/// Builds a raw process record with one input and one output port.
#[allow(dead_code)]
pub fn process(id: i64, name: &str, status: ProcessStatus) -> ProcessRecord {
    ProcessRecord {
        id,
        run_id: Some(7),
        name: name.to_string(),
        kind: "compute".to_string(),
        status,
        ports: Some(PortSet {
            input: vec![port(&format!("p{}-in", id), "in")],
            output: vec![port(&format!("p{}-out", id), "out")],
        }),
        started_at: None,
        finished_at: None,
    }
}

#[allow(dead_code)]
pub fn port(id: &str, name: &str) -> PortRecord {
    PortRecord {
        id: id.to_string(),
        name: name.to_string(),
        data_type: "dataset".to_string(),
        connected_from: None,
        connected_to: None,
    }
}

/// Builds a raw connection record between two processes' default ports.
#[allow(dead_code)]
pub fn connection(id: i64, source_process: i64, target_process: i64) -> ConnectionRecord {
    ConnectionRecord {
        connection_id: id,
        source_process_id: source_process,
        source_port_id: format!("p{}-out", source_process),
        target_process_id: target_process,
        target_port_id: format!("p{}-in", target_process),
    }
}

/// Builds a connection record with explicit port ids, for last-wins tests.
#[allow(dead_code)]
pub fn connection_on_ports(
    id: i64,
    source_process: i64,
    source_port: &str,
    target_process: i64,
    target_port: &str,
) -> ConnectionRecord {
    ConnectionRecord {
        connection_id: id,
        source_process_id: source_process,
        source_port_id: source_port.to_string(),
        target_process_id: target_process,
        target_port_id: target_port.to_string(),
    }
}

/// Canonical operation node owned by the given process, for resolver tests
/// that skip raw-record normalization.
#[allow(dead_code)]
pub fn operation_node(id: &str, process_id: &str) -> GraphNode {
    let mut node = GraphNode::bare(id, format!("operation-{}", id));
    node.process_id = Some(process_id.to_string());
    node
}

/// Canonical edge between two endpoints.
#[allow(dead_code)]
pub fn canonical_edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge::between(source, target)
}

/// Layout inputs for the given node ids.
#[allow(dead_code)]
pub fn layout_nodes(ids: &[&str]) -> Vec<LayoutNode> {
    ids.iter().map(|id| LayoutNode::new(*id)).collect()
}

/// The records of a three-process chain run: Ingest -> Filter -> Aggregate,
/// with an intra-process edge inside Ingest and a stale edge referencing an
/// unloaded operation.
#[allow(dead_code)]
pub fn create_chain_run() -> RunRecords {
    RunRecords {
        operations: vec![
            operation(10, 1, OperationStatus::Completed),
            operation(11, 1, OperationStatus::Completed),
            operation(20, 2, OperationStatus::Running),
            operation(30, 3, OperationStatus::NotStarted),
        ],
        edges: vec![
            edge_record(1, 10, 11), // collapses to a self-loop at process level
            edge_record(2, 11, 20),
            edge_record(3, 20, 30),
            edge_record(4, 30, 99), // operation 99 was never loaded
        ],
        processes: vec![
            process(1, "Ingest", ProcessStatus::Completed),
            process(2, "Filter", ProcessStatus::Running),
            process(3, "Aggregate", ProcessStatus::Pending),
        ],
        connections: vec![connection(1, 1, 2), connection(2, 2, 3)],
    }
}
