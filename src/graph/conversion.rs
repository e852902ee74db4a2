use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a canonical
/// [`GraphDefinition`].
///
/// This is the primary extension point for making the crate format-agnostic.
/// The built-in [`crate::ui`] record types cover the experiment-tracking
/// backend's JSON; any other source of nodes and edges (a different
/// tracker, a test fixture format, an export file) only needs to implement
/// this trait to feed the same resolution and layout pipeline.
///
/// # Example
///
/// ```rust,no_run
/// use haichi::error::GraphConversionError;
/// use haichi::graph::{GraphDefinition, GraphEdge, GraphNode, IntoGraph};
///
/// struct MyStep { id: u32, name: String }
/// struct MyTrace { steps: Vec<MyStep>, deps: Vec<(u32, u32)> }
///
/// impl IntoGraph for MyTrace {
///     fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|s| GraphNode::bare(s.id.to_string(), s.name))
///             .collect();
///         let edges = self
///             .deps
///             .into_iter()
///             .map(|(from, to)| GraphEdge::between(from.to_string(), to.to_string()))
///             .collect();
///         Ok(GraphDefinition { nodes, edges })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a canonical graph
    /// definition.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
