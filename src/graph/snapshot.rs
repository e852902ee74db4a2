use crate::error::SnapshotError;
use crate::graph::GraphEdge;
use crate::view::{GraphViewModel, ViewNode};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A fully positioned graph, serialized with bincode so a composed view can
/// be cached on disk or handed across a process boundary without
/// recomputing the layout.
#[derive(Serialize, Deserialize, Debug)]
pub struct GraphSnapshot {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<ViewNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Captures the positioned content of a view model. Selection flags are
    /// preserved as-is; callers that want a neutral snapshot should pass an
    /// unselected view.
    pub fn from_view(view: &GraphViewModel) -> Self {
        Self {
            nodes: view.nodes.clone(),
            edges: view.edges.clone(),
        }
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the snapshot to a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}
