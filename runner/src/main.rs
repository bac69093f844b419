use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use processor::{Processor, HEADER};
use scheduler::{load_jobs, Algorithm, Scheduler, DEFAULT_QUANTUM};

/// Simulates CPU scheduling of a batch of jobs
#[derive(Parser, Debug)]
#[command(name = "cpusim", version, about, long_about = None)]
struct Cli {
    /// Job list, one `id cpu_burst io_burst repetitions priority` per line
    file: PathBuf,

    /// Scheduling algorithm: FCFS, SRTF or RR
    algorithm: Algorithm,

    /// Round robin quantum, in ticks
    #[arg(long, env = "CPUSIM_QUANTUM", default_value_t = DEFAULT_QUANTUM)]
    quantum: NonZeroUsize,

    /// Only print the final report
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let jobs = load_jobs(&cli.file)
        .with_context(|| format!("failed to load jobs from {}", cli.file.display()))?;
    info!(file = %cli.file.display(), jobs = jobs.len(), "jobs loaded");

    let scheduler = Scheduler::new(&jobs, cli.algorithm.policy(cli.quantum))?;

    let quiet = cli.quiet;
    if !quiet {
        println!("{HEADER}");
    }
    let run = Processor::run_with(scheduler, |log| {
        if !quiet {
            println!("{log}");
        }
    });

    println!();
    print!("{}", run.report);

    Ok(())
}

#[cfg(test)]
mod tests;
