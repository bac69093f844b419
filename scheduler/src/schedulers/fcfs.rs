use crate::{Job, Policy, Tick};

/// First come, first served.
///
/// The static priority field is the arrival rank, so the key never changes
/// between insertions of the same job.
#[derive(Debug, Copy, Clone, Default)]
pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn priority(&self, job: &Job, _now: Tick) -> i64 {
        i64::from(job.priority)
    }
}
