use std::num::NonZeroUsize;

use crate::{Job, Policy, Tick};

/// Round robin with a fixed quantum.
///
/// Jobs are keyed by the tick they entered the queue, which makes the queue
/// FIFO: everything inserted during one tick ties and keeps insertion order.
#[derive(Debug, Copy, Clone)]
pub struct RoundRobin {
    quantum: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin { quantum }
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn priority(&self, _job: &Job, now: Tick) -> i64 {
        i64::try_from(now).unwrap_or(i64::MAX)
    }

    fn quantum(&self) -> Option<NonZeroUsize> {
        Some(self.quantum)
    }
}
