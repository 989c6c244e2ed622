//! CLI front end (SPEC_FULL.md §10.C/§10.E). Loads two edge-list files,
//! runs the solver with an optional wall-clock timeout, and prints the
//! result. Follows `vigna-webgraph-rs`'s CLI shape: `clap` derive for
//! argument parsing, `env_logger` initialised from `RUST_LOG`, and a
//! background thread flipping an `AtomicBool` abort flag for cancellation.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use subiso::{solve_with_bucket, Params, SolverError};

/// Search for a subgraph isomorphism from a pattern graph into a target graph.
#[derive(Parser, Debug)]
#[command(
    name = "subiso",
    version = "0.1.0",
    about = "Search for a subgraph isomorphism from a pattern graph into a target graph"
)]
struct Cli {
    /// Path to the pattern graph, in edge-list format.
    pattern: PathBuf,

    /// Path to the target graph, in edge-list format.
    target: PathBuf,

    /// Supplemental-graph band depth.
    #[arg(long, default_value_t = 4)]
    k: usize,

    /// Number of banding passes (1 or 2).
    #[arg(long, default_value_t = 2)]
    l: usize,

    /// Abort the search after this many milliseconds, if still running.
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SolverError> {
    let pattern_text = fs::read_to_string(&cli.pattern).map_err(|e| SolverError::Parse {
        message: format!("reading {}: {e}", cli.pattern.display()),
    })?;
    let target_text = fs::read_to_string(&cli.target).map_err(|e| SolverError::Parse {
        message: format!("reading {}: {e}", cli.target.display()),
    })?;

    let pattern = subiso::reader::parse(&pattern_text)?;
    let target = subiso::reader::parse(&target_text)?;

    let abort = Arc::new(AtomicBool::new(false));
    let params = Params {
        k: cli.k,
        l: cli.l,
        abort: Arc::clone(&abort),
    };

    let timeout_handle = cli.timeout_ms.map(|ms| {
        let abort = Arc::clone(&abort);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            abort.store(true, Ordering::Relaxed);
        })
    });

    let result = solve_with_bucket(&pattern, &target, &params)?;

    if let Some(handle) = timeout_handle {
        abort.store(true, Ordering::Relaxed);
        let _ = handle.join();
    }

    if !result.complete {
        println!("search aborted before completion");
    } else if result.solution_count == 0 {
        println!("no isomorphism found");
    } else {
        println!("isomorphism found:");
        for (p, t) in &result.isomorphism {
            println!("  {p} -> {t}");
        }
    }
    log::info!(
        "nodes={} propagations={} complete={}",
        result.nodes,
        result.propagations,
        result.complete
    );

    Ok(())
}
