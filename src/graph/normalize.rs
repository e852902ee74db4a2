//! Record normalization: the one place numeric wire identifiers become the
//! string keys every downstream consumer (resolver, layout, renderer)
//! operates on.
//!
//! Nothing here validates anything. These functions are total: every record
//! in produces exactly one value out, and invariant enforcement (dangling
//! endpoints, self-loops, duplicates) is deferred to
//! [`crate::resolve::EdgeResolver`] so that normalization has no failure
//! modes.

use super::definition::{GraphEdge, GraphNode, NodeStatus, Port, PortLink, Ports};
use crate::ui::{
    ConnectionRecord, EdgeRecord, OperationRecord, OperationStatus, PortRecord, PortSet,
    ProcessRecord, ProcessStatus,
};

impl From<OperationStatus> for NodeStatus {
    fn from(status: OperationStatus) -> Self {
        match status {
            OperationStatus::NotStarted => NodeStatus::NotStarted,
            OperationStatus::Running => NodeStatus::Running,
            OperationStatus::Completed => NodeStatus::Completed,
            OperationStatus::Error => NodeStatus::Error,
        }
    }
}

impl From<ProcessStatus> for NodeStatus {
    fn from(status: ProcessStatus) -> Self {
        // The renderer's status vocabulary is the operation one; `pending`
        // and `failed` fold onto its nearest states.
        match status {
            ProcessStatus::Pending => NodeStatus::NotStarted,
            ProcessStatus::Running => NodeStatus::Running,
            ProcessStatus::Completed => NodeStatus::Completed,
            ProcessStatus::Failed => NodeStatus::Error,
        }
    }
}

/// Converts raw operation records and operation-level edge records into the
/// canonical vocabulary.
///
/// Every numeric identifier is coerced to string form. An absent
/// `parent_id` stays `None`. Edges get the canonical `"e{from}-{to}"` id.
pub fn normalize(
    operations: &[OperationRecord],
    edges: &[EdgeRecord],
) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let nodes = operations.iter().map(normalize_operation).collect();
    let edges = edges
        .iter()
        .map(|edge| GraphEdge::between(edge.from_id.to_string(), edge.to_id.to_string()))
        .collect();
    (nodes, edges)
}

fn normalize_operation(record: &OperationRecord) -> GraphNode {
    GraphNode {
        id: record.id.to_string(),
        label: record.name.clone(),
        status: record.status.into(),
        kind: None,
        process_id: Some(record.process_id.to_string()),
        parent_id: record.parent_id.map(|id| id.to_string()),
        is_transport: record.is_transport,
        is_data: record.is_data,
        started_at: record.started_at.clone(),
        finished_at: record.finished_at.clone(),
        storage_address: record.storage_address.clone(),
        ports: None,
    }
}

/// Converts raw process records into canonical process-level nodes.
pub fn normalize_processes(processes: &[ProcessRecord]) -> Vec<GraphNode> {
    processes
        .iter()
        .map(|record| GraphNode {
            id: record.id.to_string(),
            label: record.name.clone(),
            status: record.status.into(),
            kind: Some(record.kind.clone()),
            process_id: None,
            parent_id: None,
            is_transport: false,
            is_data: false,
            started_at: record.started_at.clone(),
            finished_at: record.finished_at.clone(),
            storage_address: None,
            ports: record.ports.as_ref().map(normalize_ports),
        })
        .collect()
}

fn normalize_ports(ports: &PortSet) -> Ports {
    Ports {
        input: ports.input.iter().map(normalize_port).collect(),
        output: ports.output.iter().map(normalize_port).collect(),
    }
}

fn normalize_port(port: &PortRecord) -> Port {
    Port {
        id: port.id.clone(),
        name: port.name.clone(),
        data_type: port.data_type.clone(),
        connected_from: port.connected_from.clone(),
        connected_to: port.connected_to.clone(),
    }
}

/// Converts raw connection records into canonical port links.
pub fn normalize_links(connections: &[ConnectionRecord]) -> Vec<PortLink> {
    connections
        .iter()
        .map(|record| PortLink {
            source: record.source_process_id.to_string(),
            source_port: record.source_port_id.clone(),
            target: record.target_process_id.to_string(),
            target_port: record.target_port_id.clone(),
        })
        .collect()
}
