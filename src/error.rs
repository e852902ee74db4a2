use thiserror::Error;

/// Errors that can occur when converting a custom record format into a
/// canonical [`GraphDefinition`](crate::graph::GraphDefinition).
///
/// The transformation core itself (normalization, edge resolution, layout,
/// view-model merge) is total and never returns an error: malformed backend
/// records degrade to omitted edges or default levels instead of failures.
/// Errors exist only at the crate's ingestion and persistence boundaries.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid record data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a positioned graph snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot encoding failed: {0}")]
    Encode(String),

    #[error("Snapshot decoding failed: {0}")]
    Decode(String),
}
