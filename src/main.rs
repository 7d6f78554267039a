use std::fs::{self, File};
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use chakra::input::{self, Request};
use chakra::names::Names;
use chakra::query::answer_queries;
use chakra::report;
use chakra::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "chakra")]
#[command(about = "Compute the minimum chakra cost from a source ninja to every other ninja and answer queries.", long_about = None)]
struct Cli {
    /// Number of ninjas N; ninjas are numbered 1..=N
    #[arg(short, long, allow_negative_numbers = true)]
    ninjas: i64,

    /// Source ninja the chakra starts from
    #[arg(short, long, allow_negative_numbers = true)]
    source: i64,

    /// File with one connection `u v t` per line, `-` for stdin
    #[arg(short, long)]
    connections: String,

    /// Ninjas to query, comma separated
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    queries: Vec<i64>,

    /// File with one query per line, appended after --queries
    #[arg(long)]
    queries_file: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Heap)]
    algorithm: Algorithm,

    /// Seed for the ninja name shuffle. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Name ninjas in roster order instead of shuffling
    #[arg(long, default_value_t = false, conflicts_with = "seed")]
    roster_order: bool,

    /// Output CSV (node_id, name, distance). If omitted, only query answers are printed.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable ninjas in the CSV with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Print the chakra path to every reached query target
    #[arg(long, default_value_t = false)]
    show_paths: bool,
}

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading connections from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path))
}

fn main() -> Result<()> {
    chakra::logging::init_tracing();
    let cli = Cli::parse();

    let connections = input::parse_connections(&read_source(&cli.connections)?)
        .with_context(|| format!("parsing connections in {}", &cli.connections))?;
    let mut queries = cli.queries.clone();
    if let Some(path) = &cli.queries_file {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        queries.extend(input::parse_queries(&text).with_context(|| format!("parsing queries in {}", path))?);
    }

    let request = Request::new(cli.ninjas, cli.source, &connections, queries)?;
    let graph = request.graph()?;

    let names = if cli.roster_order {
        Names::in_order(request.nodes())
    } else {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Names::shuffled(request.nodes(), &mut rng)
    };

    let paths = cli.algorithm.run(&graph, request.source());
    info!(
        algorithm = %cli.algorithm,
        reachable = paths.reachable_count(),
        ninjas = request.nodes(),
        "chakra propagated"
    );

    let results = answer_queries(&paths, request.queries());
    for (result, line) in results.iter().zip(report::result_lines(&results, &names)) {
        println!("{}", line);
        if !cli.show_paths || result.outcome.is_error() {
            continue;
        }
        if let Some(path) = usize::try_from(result.target)
            .ok()
            .and_then(|target| paths.path_to(target))
        {
            let hops: Vec<String> = path.iter().map(|&n| names.name(n as i64)).collect();
            println!("    {}", hops.join(" -> "));
        }
    }
    let failed = results.iter().filter(|r| r.outcome.is_error()).count();
    if failed > 0 {
        warn!(failed, queries = results.len(), "some ninjas cannot be reached");
    }

    if let Some(out_path) = cli.out {
        let file = File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        let rows = report::write_distances_csv(file, &paths, &names, cli.include_unreachable)
            .with_context(|| format!("writing CSV {}", &out_path))?;
        println!("Wrote distances for {} ninjas to {}", rows, out_path);
    }

    Ok(())
}
