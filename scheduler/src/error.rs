use std::io;

use crate::JobId;

/// Everything that can go wrong before the simulation loop starts.
///
/// Once a [`Scheduler`](crate::Scheduler) has been built the per-tick
/// step cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line of the job list does not hold five integers.
    #[error("line {line}: malformed job descriptor: {reason}")]
    MalformedJob { line: usize, reason: String },

    /// The algorithm name matches none of `FCFS`, `SRTF` or `RR`.
    #[error("unknown algorithm `{0}`, expected one of FCFS, SRTF, RR")]
    UnknownAlgorithm(String),

    /// The descriptor parsed but describes a job that cannot be simulated.
    #[error("job {id}: {reason}")]
    InvalidJob { id: JobId, reason: &'static str },

    /// Two descriptors share the same id.
    #[error("duplicate job id {0}")]
    DuplicateJob(JobId),

    #[error("cannot read job list: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
