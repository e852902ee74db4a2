use haichi::prelude::*;
use std::env;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: cargo run -- [path/to/run_records.json]");
        std::process::exit(1);
    }

    // Load input records
    let records = if let Some(path) = args.get(1) {
        println!("Loading run records from: {}", path);
        match RunRecords::from_file(path) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Failed to load run records from '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No records file provided. Using built-in mock run.");
        RunRecords::mock()
    };

    println!(
        "Loaded {} operations, {} edges, {} processes, {} connections",
        records.operations.len(),
        records.edges.len(),
        records.processes.len(),
        records.connections.len()
    );

    let composer = GraphComposer::from_records(&records.processes, &records.connections);

    // Process-level view
    println!("\nProcess view:");
    let view = composer.compose_processes(&records.operations, &records.edges, &Selection::none());
    print_view(&view);

    // Operation-level view
    println!("\nOperation view:");
    let view = composer.compose_operations(&records.operations, &records.edges, &Selection::none());
    print_view(&view);
}

fn print_view(view: &GraphViewModel) {
    for node in &view.nodes {
        println!(
            "  {:<20} [{}]  ({}, {})",
            node.node.label, node.node.status, node.position.x, node.position.y
        );
    }
    if view.edges.is_empty() {
        println!("  (no edges)");
    }
    for edge in &view.edges {
        match (&edge.source_port, &edge.target_port) {
            (Some(from), Some(to)) => {
                println!("  {} -> {}  ({} -> {})", edge.source, edge.target, from, to)
            }
            _ => println!("  {} -> {}", edge.source, edge.target),
        }
    }
}
