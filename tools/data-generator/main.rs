use clap::Parser;
use haichi::ui::{
    ConnectionRecord, EdgeRecord, OperationRecord, OperationStatus, PortRecord, PortSet,
    ProcessRecord, ProcessStatus,
};
use haichi::data::RunRecords;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate sample run records for the Haichi composer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_run.json")]
    output: String,

    /// The number of processes in the generated run
    #[arg(long, default_value_t = 6)]
    processes: usize,

    /// The minimum number of operations per process
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of operations per process
    #[arg(long, default_value_t = 4)]
    max: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    // Add validation to ensure min is not greater than max
    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if cli.min == 0 {
        eprintln!("Error: --min must be at least 1 (every process needs an operation)");
        std::process::exit(1);
    }

    println!(
        "Generating run with {} processes ({} to {} operations each)...",
        cli.processes, cli.min, cli.max
    );

    let records = generate_run(&mut rng, cli.processes, cli.min, cli.max);

    let json_output = serde_json::to_string_pretty(&records)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved run records to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates a random layered run: processes form a forward-only DAG, each
/// process owns a chain of operations, and operation edges follow the
/// process topology so the composed diagram is acyclic.
fn generate_run(rng: &mut ThreadRng, process_count: usize, min_ops: usize, max_ops: usize) -> RunRecords {
    let kinds = ["data", "compute", "transport"];
    let statuses = [
        ProcessStatus::Completed,
        ProcessStatus::Running,
        ProcessStatus::Pending,
    ];

    let mut processes = Vec::new();
    let mut operations = Vec::new();
    let mut edges = Vec::new();
    let mut connections = Vec::new();

    // Last operation of each process, used as the source endpoint of
    // cross-process edges.
    let mut tail_ops: Vec<i64> = Vec::new();
    let mut head_ops: Vec<i64> = Vec::new();

    let mut next_op_id: i64 = 1;
    let mut next_edge_id: i64 = 1;

    for p in 0..process_count {
        let process_id = (p + 1) as i64;
        let kind = kinds[rng.random_range(0..kinds.len())];
        let status = statuses[rng.random_range(0..statuses.len())];

        processes.push(ProcessRecord {
            id: process_id,
            run_id: Some(1),
            name: format!("process-{}", process_id),
            kind: kind.to_string(),
            status,
            ports: Some(PortSet {
                input: vec![port(process_id, "in")],
                output: vec![port(process_id, "out")],
            }),
            started_at: None,
            finished_at: None,
        });

        // A chain of operations inside the process
        let op_count = rng.random_range(min_ops..=max_ops);
        let mut previous: Option<i64> = None;
        for o in 0..op_count {
            let op_id = next_op_id;
            next_op_id += 1;

            operations.push(OperationRecord {
                id: op_id,
                process_id,
                parent_id: previous,
                name: format!("op-{}-{}", process_id, o + 1),
                status: OperationStatus::Completed,
                started_at: None,
                finished_at: None,
                storage_address: Some(format!("runs/1/op{}", op_id)),
                is_transport: kind == "transport",
                is_data: kind == "data",
                log: None,
            });

            if let Some(prev) = previous {
                edges.push(EdgeRecord {
                    id: next_edge_id,
                    run_id: Some(1),
                    from_id: prev,
                    to_id: op_id,
                });
                next_edge_id += 1;
            }

            if o == 0 {
                head_ops.push(op_id);
            }
            previous = Some(op_id);
        }
        tail_ops.push(previous.unwrap_or(next_op_id - 1));
    }

    // Forward-only cross-process dependencies keep the DAG acyclic; each
    // process after the first depends on one or two earlier ones.
    for p in 1..process_count {
        let fan_in = rng.random_range(1..=p.min(2));
        let mut sources: Vec<usize> = Vec::new();
        while sources.len() < fan_in {
            let source = rng.random_range(0..p);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        for source in sources {
            edges.push(EdgeRecord {
                id: next_edge_id,
                run_id: Some(1),
                from_id: tail_ops[source],
                to_id: head_ops[p],
            });
            next_edge_id += 1;

            connections.push(ConnectionRecord {
                connection_id: next_edge_id,
                source_process_id: (source + 1) as i64,
                source_port_id: format!("p{}-out", source + 1),
                target_process_id: (p + 1) as i64,
                target_port_id: format!("p{}-in", p + 1),
            });
        }
    }

    RunRecords {
        operations,
        edges,
        processes,
        connections,
    }
}

fn port(process_id: i64, direction: &str) -> PortRecord {
    PortRecord {
        id: format!("p{}-{}", process_id, direction),
        name: direction.to_string(),
        data_type: "dataset".to_string(),
        connected_from: None,
        connected_to: None,
    }
}
