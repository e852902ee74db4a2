//! # Haichi - Execution-Graph Construction and Layered Layout Engine
//!
//! **Haichi** turns the raw, operation-granular records an
//! experiment-tracking backend emits into a validated, positioned
//! dependency graph ready for top-down rendering. It is a pure,
//! synchronous, side-effect-free library: every transformation is a
//! function over its inputs, callers may invoke it repeatedly and in
//! parallel, and nothing is persisted between calls.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal vocabulary of string-keyed nodes and edges. The primary
//! workflow is:
//!
//! 1.  **Load Your Records**: Parse the backend's payloads into the
//!     [`ui`] record types (or your own structs).
//! 2.  **Normalize**: [`graph::normalize`] coerces every numeric
//!     identifier to string form exactly once, producing the canonical
//!     [`graph::GraphNode`]/[`graph::GraphEdge`] vocabulary. Custom formats
//!     implement [`graph::IntoGraph`] instead.
//! 3.  **Resolve**: [`resolve::EdgeResolver`] translates operation-level
//!     edges to process granularity: dropping unresolvable references,
//!     self-loops, and edges leaving the rendered node set, collapsing
//!     duplicates, and annotating each surviving edge with its port pair.
//! 4.  **Layout**: [`layout::LayeredLayout`] assigns deterministic (x, y)
//!     positions via multi-root BFS leveling, with a fixed-column fallback
//!     for edgeless input. Swap in any engine honoring
//!     [`layout::LayoutProvider`].
//! 5.  **Merge**: [`view::merge`] combines positioned nodes, edges, and
//!     caller-owned selection state into the [`view::GraphViewModel`] the
//!     renderer consumes.
//!
//! [`composer::GraphComposer`] wires steps 2–5 together for the common
//! case.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use haichi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Records for one run, as fetched from the backend.
//!     let records = RunRecords::from_file("data/run_42.json")?;
//!
//!     // Wire the pipeline once per run...
//!     let composer = GraphComposer::from_records(&records.processes, &records.connections);
//!
//!     // ...and compose once per render.
//!     let selection = Selection::node("2");
//!     let view = composer.compose_processes(&records.operations, &records.edges, &selection);
//!
//!     for node in &view.nodes {
//!         println!(
//!             "{:<12} level y={:>6} x={:>8} {}",
//!             node.node.label,
//!             node.position.y,
//!             node.position.x,
//!             if node.selected { "[selected]" } else { "" },
//!         );
//!     }
//!     for edge in &view.edges {
//!         println!("{} -> {}", edge.source, edge.target);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Semantics
//!
//! The transformation core never fails. Malformed or stale backend records
//! degrade the diagram (an edge is omitted, a node in a cyclic component
//! is leveled at 0) rather than crashing it. `Result` appears only at the
//! ingestion boundary ([`graph::IntoGraph`]) and the snapshot boundary
//! ([`graph::GraphSnapshot`]).

pub mod composer;
pub mod data;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod resolve;
pub mod ui;
pub mod view;
