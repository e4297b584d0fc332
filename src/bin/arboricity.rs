use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use clique_census::arboricity::count_k_cliques;
use clique_census::io::read_edge_list;
use clique_census::sink::CliqueStats;

/// Count k-cliques of an undirected edge list for k = 2, 3, ... until the
/// count reaches zero, producing the full clique size distribution.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// whitespace-separated edge list; lines starting with '#' are comments
    input: PathBuf,
}

/// Like `Args::parse`, but argument errors exit with status 1.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        err.print().ok();
        std::process::exit(code);
    })
}

fn main() -> anyhow::Result<()> {
    let args = parse_args();

    let loaded = read_edge_list(&args.input)?;
    println!(
        "Graph loaded: {} nodes, {} edges",
        loaded.graph.n(),
        loaded.graph.edge_count()
    );

    let mut stats = CliqueStats::new();
    stats.record_k_count(1, loaded.graph.non_isolated_count() as u64);

    let total_start = Instant::now();
    let mut total: u64 = 0;
    for k in 2.. {
        let iter_start = Instant::now();
        let count = count_k_cliques(&loaded.graph, k);
        println!(
            "# Number of {}-cliques: {} ({:.3} seconds)",
            k,
            count,
            iter_start.elapsed().as_secs_f64()
        );
        if count == 0 {
            break;
        }
        stats.record_k_count(k, count);
        total += count;
    }

    let report = stats.snapshot();
    let clique_number = report.per_k_counts.len().saturating_sub(1);
    println!();
    println!("All {} cliques of size >= 2 found.", total);
    println!("Clique number: {}", clique_number);
    println!("{:<12} {:<20}", "Clique size", "Count");
    for (k, &count) in report.per_k_counts.iter().enumerate().skip(1) {
        println!("{:<12} {:<20}", k, count);
    }
    println!(
        "Total execution time: {:.3} seconds",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
