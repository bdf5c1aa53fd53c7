use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hampath::{solve, Graph, Method, CSV_HEADER, MAX_DP_VERTICES};

/// Decides whether a graph instance admits a Hamiltonian path, running
/// three strategies whose measurements are directly comparable.
#[derive(Parser, Debug)]
#[command(name = "hampath", version, about)]
struct Args {
    /// Instance file: first line `n m`, then one `u v` edge per line.
    instance: PathBuf,

    /// Emit machine-readable CSV records instead of the human report.
    #[arg(long)]
    csv: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let graph = match Graph::load(&args.instance) {
        Ok(g) => g,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.csv {
        println!("{CSV_HEADER}");
        for method in Method::ALL {
            println!("{}", solve(method, &graph).csv_line());
        }
        return ExitCode::SUCCESS;
    }

    println!("========================================");
    println!("  HAMILTONIAN PATH DETECTOR");
    println!("========================================");
    println!();
    println!("Instance: {}", args.instance.display());
    println!("Vertices: {} | Edges: {}", graph.order(), graph.edge_count());
    println!("Density: {:.2}%", graph.density() * 100.0);
    println!("========================================");
    println!();

    let total = Method::ALL.len();
    for (i, method) in Method::ALL.into_iter().enumerate() {
        if method == Method::BitmaskDp && graph.order() > MAX_DP_VERTICES {
            println!("[{}/{total}] {method} skipped (n > {MAX_DP_VERTICES})", i + 1);
            continue;
        }
        println!("[{}/{total}] Running {method}...", i + 1);
        println!("{}", solve(method, &graph));
        println!();
    }

    ExitCode::SUCCESS
}
