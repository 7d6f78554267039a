use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use chakra::input::load_csv_edges;
use chakra::{Algorithm, Distance};

#[derive(Parser, Debug)]
#[command(name = "chakra-bench")]
#[command(about = "Build a graph from a CSV with u,v,weight rows and time an SSP algorithm from a series of source ninjas.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Number of runs. Picks a new (deterministic) source per run (1, 2, 3, ...num_runs), wrapping at N.
    #[arg(short, long)]
    num_runs: usize,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Heap)]
    algorithm: Algorithm,

    /// Number of ninjas. Defaults to the largest id in the CSV.
    #[arg(long)]
    nodes: Option<usize>,

    /// Also run every other algorithm and fail if any distance differs.
    #[arg(long, default_value_t = false)]
    compare: bool,
}

fn main() -> Result<()> {
    chakra::logging::init_tracing();
    let cli = Cli::parse();

    let loaded = load_csv_edges(&cli.csv, cli.nodes).with_context(|| format!("loading {}", &cli.csv))?;
    let graph = loaded.graph()?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        algorithm = %cli.algorithm,
        "graph loaded"
    );

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    for run in 0..cli.num_runs {
        let source = run % graph.node_count() + 1;
        let now = Instant::now();
        let paths = cli.algorithm.run(&graph, source);
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        debug!(source, reachable = paths.reachable_count(), "run finished");

        if cli.compare {
            let expected: Vec<Distance<_>> = paths.distances().map(|(_, d)| d).collect();
            for other in Algorithm::ALL.into_iter().filter(|a| *a != cli.algorithm) {
                let got: Vec<Distance<_>> = other.run(&graph, source).distances().map(|(_, d)| d).collect();
                ensure!(
                    got == expected,
                    "{} and {} disagree on distances from source {}",
                    cli.algorithm,
                    other,
                    source
                );
            }
        }
    }
    println!("{:?}", duration_millis);

    if !duration_millis.is_empty() {
        let total: f64 = duration_millis.iter().sum();
        println!(
            "mean {:.3} ms over {} runs",
            total / duration_millis.len() as f64,
            duration_millis.len()
        );
    }

    Ok(())
}
