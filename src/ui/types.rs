use serde::{Deserialize, Serialize};

/// Lifecycle state of an executed operation, as serialized by the backend.
///
/// The wire format uses lowercase phrases, including the two-word
/// `"not started"`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    #[serde(rename = "not started")]
    NotStarted,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "error")]
    Error,
}

/// Lifecycle state of a process, as serialized by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "failed")]
    Failed,
}

/// One executed step within a run. Immutable snapshot as delivered by the
/// backend; all identifiers are numeric on the wire.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OperationRecord {
    pub id: i64,
    #[serde(alias = "processId")]
    pub process_id: i64,
    #[serde(alias = "parentId")]
    pub parent_id: Option<i64>,
    pub name: String,
    pub status: OperationStatus,
    #[serde(default, alias = "startedAt")]
    pub started_at: Option<String>,
    #[serde(default, alias = "finishedAt")]
    pub finished_at: Option<String>,
    #[serde(default, alias = "storageAddress")]
    pub storage_address: Option<String>,
    #[serde(default, alias = "isTransport")]
    pub is_transport: bool,
    #[serde(default, alias = "isData")]
    pub is_data: bool,
    #[serde(default)]
    pub log: Option<String>,
}

/// Operation-level dependency edge.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EdgeRecord {
    pub id: i64,
    #[serde(default, alias = "runId")]
    pub run_id: Option<i64>,
    #[serde(alias = "fromId")]
    pub from_id: i64,
    #[serde(alias = "toId")]
    pub to_id: i64,
}

/// Named, typed attachment point on a process.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PortRecord {
    pub id: String,
    pub name: String,
    #[serde(alias = "dataType")]
    pub data_type: String,
    #[serde(default, alias = "connectedFrom")]
    pub connected_from: Option<String>,
    #[serde(default, alias = "connectedTo")]
    pub connected_to: Option<String>,
}

/// Input/output port partition of a process.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PortSet {
    #[serde(default)]
    pub input: Vec<PortRecord>,
    #[serde(default)]
    pub output: Vec<PortRecord>,
}

/// A logical unit grouping operations. Identity is stable across a run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProcessRecord {
    pub id: i64,
    #[serde(default, alias = "runId")]
    pub run_id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: ProcessStatus,
    #[serde(default)]
    pub ports: Option<PortSet>,
    #[serde(default, alias = "startedAt")]
    pub started_at: Option<String>,
    #[serde(default, alias = "finishedAt")]
    pub finished_at: Option<String>,
}

/// A realized wire between one process's output port and another's input
/// port.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConnectionRecord {
    #[serde(alias = "connectionId")]
    pub connection_id: i64,
    #[serde(alias = "sourceProcessId")]
    pub source_process_id: i64,
    #[serde(alias = "sourcePortId")]
    pub source_port_id: String,
    #[serde(alias = "targetProcessId")]
    pub target_process_id: i64,
    #[serde(alias = "targetPortId")]
    pub target_port_id: String,
}
