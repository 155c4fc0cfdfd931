//! Skoll Command-Line Interface
//!
//! Runs a Grover search demonstration end to end: builds the search
//! circuit for a target bit-string, simulates it on the local statevector
//! backend, reports the most frequent outcome, and writes the measurement
//! counts to a results file.
//!
//! ```text
//!                S K O L L
//!      Quantum Search on the Statevector
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

mod output;
mod report;
mod run;

/// Skoll - Grover search demonstration on a local quantum simulator
#[derive(Parser)]
#[command(name = "skoll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target bit-string to search for (character i is qubit i)
    #[arg(short, long, default_value = "11")]
    target: String,

    /// Register size; the target length must match (derived from the
    /// target when omitted)
    #[arg(short = 'n', long)]
    qubits: Option<usize>,

    /// Number of measurement shots
    #[arg(short, long, default_value = "1024")]
    shots: u32,

    /// Number of Grover iterations (0 = optimal)
    #[arg(short, long, default_value = "0")]
    iterations: usize,

    /// Output directory for the results file
    #[arg(short, long, default_value = "results")]
    out: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = run::execute(&cli.target, cli.qubits, cli.shots, cli.iterations, &cli.out).await;

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
