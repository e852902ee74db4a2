use crate::error::GraphConversionError;
use crate::graph::normalize::normalize;
use crate::graph::{GraphDefinition, IntoGraph};
use crate::ui::{
    ConnectionRecord, EdgeRecord, OperationRecord, OperationStatus, PortRecord, PortSet,
    ProcessRecord, ProcessStatus,
};
use serde::{Deserialize, Serialize};
use std::fs;

/// The full record set of one run, matching the expected JSON format for
/// composition: operations and their edges, plus the process descriptors
/// and port connections the process-level view needs.
#[derive(Serialize, Deserialize, Debug)]
pub struct RunRecords {
    pub operations: Vec<OperationRecord>,
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub processes: Vec<ProcessRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

impl RunRecords {
    /// Load run records from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Creates a small mock run when no file is provided: three chained
    /// processes with four operations, one of them a transport step.
    pub fn mock() -> Self {
        let operations = vec![
            mock_operation(10, 1, None, "fetch samples", OperationStatus::Completed, false),
            mock_operation(11, 1, Some(10), "stage samples", OperationStatus::Completed, true),
            mock_operation(20, 2, None, "filter outliers", OperationStatus::Running, false),
            mock_operation(30, 3, None, "aggregate metrics", OperationStatus::NotStarted, false),
        ];

        let edges = vec![
            mock_edge(1, 10, 11),
            mock_edge(2, 11, 20),
            mock_edge(3, 20, 30),
        ];

        let processes = vec![
            mock_process(
                1,
                "Ingest",
                "data",
                ProcessStatus::Completed,
                vec![],
                vec![mock_port("p1-out", "samples", None)],
            ),
            mock_process(
                2,
                "Filter",
                "compute",
                ProcessStatus::Running,
                vec![mock_port("p2-in", "samples", Some("p1-out"))],
                vec![mock_port("p2-out", "filtered", None)],
            ),
            mock_process(
                3,
                "Aggregate",
                "compute",
                ProcessStatus::Pending,
                vec![mock_port("p3-in", "filtered", Some("p2-out"))],
                vec![],
            ),
        ];

        let connections = vec![
            ConnectionRecord {
                connection_id: 1,
                source_process_id: 1,
                source_port_id: "p1-out".to_string(),
                target_process_id: 2,
                target_port_id: "p2-in".to_string(),
            },
            ConnectionRecord {
                connection_id: 2,
                source_process_id: 2,
                source_port_id: "p2-out".to_string(),
                target_process_id: 3,
                target_port_id: "p3-in".to_string(),
            },
        ];

        Self {
            operations,
            edges,
            processes,
            connections,
        }
    }
}

impl IntoGraph for RunRecords {
    /// Converts the run's operations and edges into the canonical
    /// operation-level graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let (nodes, edges) = normalize(&self.operations, &self.edges);
        Ok(GraphDefinition { nodes, edges })
    }
}

fn mock_operation(
    id: i64,
    process_id: i64,
    parent_id: Option<i64>,
    name: &str,
    status: OperationStatus,
    is_transport: bool,
) -> OperationRecord {
    OperationRecord {
        id,
        process_id,
        parent_id,
        name: name.to_string(),
        status,
        started_at: None,
        finished_at: None,
        storage_address: Some(format!("runs/42/op{}", id)),
        is_transport,
        is_data: !is_transport && parent_id.is_none() && process_id == 1,
        log: None,
    }
}

fn mock_edge(id: i64, from_id: i64, to_id: i64) -> EdgeRecord {
    EdgeRecord {
        id,
        run_id: Some(42),
        from_id,
        to_id,
    }
}

fn mock_process(
    id: i64,
    name: &str,
    kind: &str,
    status: ProcessStatus,
    input: Vec<PortRecord>,
    output: Vec<PortRecord>,
) -> ProcessRecord {
    ProcessRecord {
        id,
        run_id: Some(42),
        name: name.to_string(),
        kind: kind.to_string(),
        status,
        ports: Some(PortSet { input, output }),
        started_at: None,
        finished_at: None,
    }
}

fn mock_port(id: &str, name: &str, connected_from: Option<&str>) -> PortRecord {
    PortRecord {
        id: id.to_string(),
        name: name.to_string(),
        data_type: "dataset".to_string(),
        connected_from: connected_from.map(str::to_string),
        connected_to: None,
    }
}
