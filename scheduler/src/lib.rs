//! A CPU scheduling library.
//!
//! This library provides the job model, the ready queue and the
//! tick-driven scheduler core used to simulate a batch of jobs under
//! first-come-first-served, shortest-remaining-time-first or round robin
//! scheduling.
//!

use std::num::NonZeroUsize;

mod engine;
mod error;
mod input;
mod ready_queue;
mod scheduler;
mod schedulers;

pub use crate::engine::{Scheduler, Status};
pub use crate::error::{Error, Result};
pub use crate::input::{load_jobs, parse_jobs};
pub use crate::ready_queue::ReadyQueue;
pub use crate::scheduler::{Job, JobId, JobSpec, JobState, Policy, Tick};
pub use crate::schedulers::{Algorithm, Fcfs, RoundRobin, Srtf, DEFAULT_QUANTUM};

/// Returns a first-come-first-served policy.
///
/// Jobs are dispatched in ascending order of their static priority.
pub fn fcfs() -> impl Policy {
    Fcfs
}

/// Returns a shortest-remaining-time-first policy.
///
/// Jobs are dispatched in ascending order of `cpu_burst * repetitions left`,
/// computed when they enter the ready queue.
pub fn srtf() -> impl Policy {
    Srtf
}

/// Returns a round robin policy.
///
/// * `quantum` - the number of ticks a job can run before it is preempted
///               and sent to the back of the ready queue.
pub fn round_robin(quantum: NonZeroUsize) -> impl Policy {
    RoundRobin::new(quantum)
}
