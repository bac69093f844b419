use std::num::NonZeroUsize;

use processor::{Processor, Run};
use scheduler::{load_jobs, Algorithm, JobSpec, Scheduler};

mod cli;
mod fcfs;
mod srtf;

/// Loads `../inputs/{folder}/{name}.jobs`.
fn jobs(folder: &str, name: &str) -> Vec<JobSpec> {
    load_jobs(format!("../inputs/{folder}/{name}.jobs")).unwrap()
}

fn quantum(q: usize) -> NonZeroUsize {
    NonZeroUsize::new(q).unwrap()
}

/// Simulates the job list of the test `name` from the test module `folder`.
fn run(folder: &str, name: &str, algorithm: Algorithm, quantum: NonZeroUsize) -> Run {
    let jobs = jobs(folder, name);
    let scheduler = Scheduler::new(&jobs, algorithm.policy(quantum)).unwrap();
    Processor::run(scheduler)
}

/// The job that ran in every logged tick, `0` for idle ticks.
fn cpu_trace(run: &Run) -> Vec<u32> {
    run.logs
        .iter()
        .map(|log| log.cpu.map_or(0, |id| id.get()))
        .collect()
}

/// Asserts `(start, end, wait)` of job `id`.
fn assert_job(run: &Run, id: u32, expected: (usize, usize, usize)) {
    use pretty_assertions::assert_eq;

    let job = run.report.job(id).unwrap();
    assert_eq!(
        (job.start_time, job.end_time, job.wait_time),
        (Some(expected.0), Some(expected.1), expected.2),
        "job {id}"
    );
}
