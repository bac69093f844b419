use crate::{Job, Policy, Tick};

/// Shortest remaining time first.
///
/// The remaining work is estimated as one CPU burst per remaining
/// repetition.
#[derive(Debug, Copy, Clone, Default)]
pub struct Srtf;

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn priority(&self, job: &Job, _now: Tick) -> i64 {
        let work = job.cpu_burst_length.saturating_mul(job.remaining_repetitions);
        i64::try_from(work).unwrap_or(i64::MAX)
    }
}
