use clap::{Parser, ValueEnum};
use haichi::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

/// Which granularity of the run graph to compose.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewCli {
    Processes,
    Operations,
}

/// A deterministic execution-graph construction and layout engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the run records JSON file
    records_path: Option<String>,

    /// The graph granularity to compose
    #[arg(short, long, value_enum)]
    view: Option<ViewCli>,

    /// Mark this node id as selected in the composed view
    #[arg(short, long)]
    select: Option<String>,

    /// Write the composed view to this path as a binary snapshot
    #[arg(long)]
    snapshot: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_composition(
    records_path: Option<String>,
    view_choice: ViewCli,
    select: Option<String>,
    snapshot_path: Option<String>,
) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let records = if let Some(path) = &records_path {
        RunRecords::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read records file '{}': {}", path, e))
        })
    } else {
        println!("No records file provided. Using built-in mock run.");
        RunRecords::mock()
    };
    let load_duration = load_start.elapsed();

    // --- 2. Composition ---
    let selection = match select {
        Some(id) => Selection::node(id),
        None => Selection::none(),
    };

    println!("\nComposing {:?} view...", view_choice);
    let compose_start = Instant::now();
    let composer = GraphComposer::from_records(&records.processes, &records.connections);
    let view = match view_choice {
        ViewCli::Processes => {
            composer.compose_processes(&records.operations, &records.edges, &selection)
        }
        ViewCli::Operations => {
            composer.compose_operations(&records.operations, &records.edges, &selection)
        }
    };
    let compose_duration = compose_start.elapsed();

    // --- 3. Results ---
    println!(
        "Composed {} nodes and {} edges",
        view.nodes.len(),
        view.edges.len()
    );
    for node in &view.nodes {
        println!(
            "  {:<24} [{:<11}] x={:>8.1} y={:>8.1}{}",
            node.node.label,
            node.node.status.to_string(),
            node.position.x,
            node.position.y,
            if node.selected { "  <- selected" } else { "" },
        );
    }
    for edge in &view.edges {
        match (&edge.source_port, &edge.target_port) {
            (Some(from), Some(to)) => {
                println!("  {} -> {} via {} -> {}", edge.source, edge.target, from, to)
            }
            _ => println!("  {} -> {}", edge.source, edge.target),
        }
    }

    // --- 4. Snapshot ---
    let mut snapshot_duration = None;
    if let Some(path) = snapshot_path {
        let snapshot_start = Instant::now();
        GraphSnapshot::from_view(&view)
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
        snapshot_duration = Some(snapshot_start.elapsed());
        println!("\nSnapshot written to '{}'", path);
    }

    // --- 5. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Run Summary ---");
    println!("Operations:  {}", records.operations.len());
    println!("Raw Edges:   {}", records.edges.len());
    println!("Processes:   {}", records.processes.len());
    println!("Connections: {}", records.connections.len());

    println!("\n--- Performance Summary ---");
    println!("File Loading:   {:?}", load_duration);
    println!("Composition:    {:?}", compose_duration);
    if let Some(d) = snapshot_duration {
        println!("Snapshot Write: {:?}", d);
    }
    println!("---------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let view_choice = cli.view.unwrap_or(ViewCli::Processes);
    run_composition(cli.records_path, view_choice, cli.select, cli.snapshot);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Haichi Interactive Mode ---");

    let records_path_str =
        prompt_for_input("Enter run records path (blank for mock)", Some("data/run.json"));
    let records_path = if records_path_str.is_empty() {
        None
    } else {
        Some(records_path_str)
    };

    let view_choice = loop {
        println!("\nPlease select a view:");
        println!("  1: Processes (collapsed, port-annotated)");
        println!("  2: Operations (raw dependency graph)");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break ViewCli::Processes,
            "2" => break ViewCli::Operations,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    };

    let select_str = prompt_for_input("Node id to select (optional)", None);
    let select = if select_str.is_empty() {
        None
    } else {
        Some(select_str)
    };

    run_composition(records_path, view_choice, select, None);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
