use crate::graph::normalize::{normalize, normalize_links, normalize_processes};
use crate::graph::{GraphNode, PortLink};
use crate::layout::{LayeredLayout, LayoutNode, LayoutProvider};
use crate::resolve::EdgeResolver;
use crate::ui::{ConnectionRecord, EdgeRecord, OperationRecord, ProcessRecord};
use crate::view::{GraphViewModel, Selection, merge};
use ahash::AHashSet;
use tracing::debug;

#[cfg(feature = "debug-tools")]
use std::fs;

/// The full pipeline, wired once per run and invoked once per render:
/// normalize → resolve → layout → merge.
///
/// Process nodes and port links are fixed for the lifetime of the composer;
/// operations and operation edges arrive per call, since the backend
/// refreshes them while a run executes.
pub struct GraphComposer {
    processes: Vec<GraphNode>,
    links: Vec<PortLink>,
    layout: Box<dyn LayoutProvider>,
}

pub struct GraphComposerBuilder {
    processes: Vec<GraphNode>,
    links: Vec<PortLink>,
    layout: Box<dyn LayoutProvider>,
}

impl GraphComposerBuilder {
    pub fn new(processes: Vec<GraphNode>, links: Vec<PortLink>) -> Self {
        Self {
            processes,
            links,
            layout: Box::new(LayeredLayout),
        }
    }

    /// Substitutes the layout engine. Any provider honoring the
    /// [`LayoutProvider`] contract can stand in for the baseline.
    pub fn with_layout(mut self, layout: Box<dyn LayoutProvider>) -> Self {
        self.layout = layout;
        self
    }

    pub fn build(self) -> GraphComposer {
        GraphComposer {
            processes: self.processes,
            links: self.links,
            layout: self.layout,
        }
    }
}

impl GraphComposer {
    pub fn builder(processes: Vec<GraphNode>, links: Vec<PortLink>) -> GraphComposerBuilder {
        GraphComposerBuilder::new(processes, links)
    }

    /// Convenience constructor straight from raw backend records.
    pub fn from_records(
        processes: &[ProcessRecord],
        connections: &[ConnectionRecord],
    ) -> GraphComposer {
        GraphComposerBuilder::new(
            normalize_processes(processes),
            normalize_links(connections),
        )
        .build()
    }

    /// Composes the process-level view: one node per process, operation
    /// edges translated to process granularity.
    pub fn compose_processes(
        &self,
        operations: &[OperationRecord],
        operation_edges: &[EdgeRecord],
        selection: &Selection,
    ) -> GraphViewModel {
        let (operation_nodes, raw_edges) = normalize(operations, operation_edges);

        let process_ids: AHashSet<String> =
            self.processes.iter().map(|p| p.id.clone()).collect();
        let resolver = EdgeResolver::new(&operation_nodes, &self.links);
        let edges = resolver.resolve(&raw_edges, &process_ids);

        debug!(
            operation_edges = raw_edges.len(),
            process_edges = edges.len(),
            omitted = raw_edges.len() - edges.len(),
            "resolved process-level edge set"
        );

        let layout_nodes: Vec<LayoutNode> = self
            .processes
            .iter()
            .map(|p| LayoutNode::new(p.id.clone()))
            .collect();
        let placed = self.layout.layout(&layout_nodes, &edges);

        let view = merge(&self.processes, &placed, edges, selection);

        #[cfg(feature = "debug-tools")]
        self.write_debug_dump("tmp/process_view.txt", &view);

        view
    }

    /// Composes the operation-level view: the raw dependency graph, laid
    /// out directly without process collapsing.
    pub fn compose_operations(
        &self,
        operations: &[OperationRecord],
        operation_edges: &[EdgeRecord],
        selection: &Selection,
    ) -> GraphViewModel {
        let (nodes, edges) = normalize(operations, operation_edges);

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "composing operation-level view"
        );

        let layout_nodes: Vec<LayoutNode> = nodes
            .iter()
            .map(|n| LayoutNode::new(n.id.clone()))
            .collect();
        let placed = self.layout.layout(&layout_nodes, &edges);

        let view = merge(&nodes, &placed, edges, selection);

        #[cfg(feature = "debug-tools")]
        self.write_debug_dump("tmp/operation_view.txt", &view);

        view
    }

    #[cfg(feature = "debug-tools")]
    fn write_debug_dump(&self, path: &str, view: &GraphViewModel) {
        let mut out = String::new();
        for node in &view.nodes {
            out.push_str(&format!(
                "{}\t({}, {})\n",
                node.node.id, node.position.x, node.position.y
            ));
        }
        for edge in &view.edges {
            out.push_str(&format!("{} -> {}\n", edge.source, edge.target));
        }
        if let Some(parent) = std::path::Path::new(path).parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Warning: could not create debug directory: {}", e);
                return;
            }
        }
        if let Err(e) = fs::write(path, out) {
            eprintln!("Warning: could not write debug dump '{}': {}", path, e);
        }
    }
}
