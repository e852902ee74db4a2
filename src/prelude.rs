//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! haichi crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use haichi::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load one run's records and compose the process-level view.
//! let records = RunRecords::from_file("path/to/run.json")?;
//!
//! let composer = GraphComposer::from_records(&records.processes, &records.connections);
//! let view = composer.compose_processes(&records.operations, &records.edges, &Selection::none());
//!
//! for node in &view.nodes {
//!     println!("{} @ ({}, {})", node.node.label, node.position.x, node.position.y);
//! }
//! # Ok(())
//! # }
//! ```

// Pipeline orchestration
pub use crate::composer::{GraphComposer, GraphComposerBuilder};

// Canonical graph vocabulary
pub use crate::graph::{
    GraphDefinition, GraphEdge, GraphNode, GraphSnapshot, IntoGraph, NodeStatus, PlacedNode, Point,
    Port, PortLink, Ports,
};

// Normalization and resolution
pub use crate::graph::normalize::{normalize, normalize_links, normalize_processes};
pub use crate::resolve::{EdgeResolver, resolve_process_edges};

// Layout engine
pub use crate::layout::{
    FALLBACK_X, HORIZONTAL_SPACING, LayeredLayout, LayoutNode, LayoutProvider, ROW_HEIGHT,
    VERTICAL_SPACING,
};

// View model
pub use crate::view::{GraphViewModel, Selection, ViewNode, merge};

// Raw record types and loaders
pub use crate::data::RunRecords;
pub use crate::ui::{ConnectionRecord, EdgeRecord, OperationRecord, ProcessRecord};

// Error types
pub use crate::error::{GraphConversionError, SnapshotError};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
