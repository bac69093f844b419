use std::fmt::{self, Display};
use std::num::NonZeroUsize;

/// A value of the logical simulation clock.
///
/// The clock starts at 1 and advances by one after every simulated tick.
pub type Tick = usize;

/// The id of a job, as given in the job list.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct JobId(u32);

impl JobId {
    pub fn new(id: u32) -> JobId {
        JobId(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl PartialEq<u32> for JobId {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of the job list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub id: JobId,

    /// Length of every CPU burst, must be positive.
    pub cpu_burst: usize,

    /// Length of the I/O burst that follows every CPU burst.
    pub io_burst: usize,

    /// Number of CPU/I-O cycles. 0 and 1 both run a single cycle.
    pub repetitions: usize,

    /// Static priority. First-come-first-served orders by this value.
    pub priority: i32,
}

/// The state of a job.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JobState {
    /// The job sits in the ready queue.
    Ready,

    /// The job owns the CPU.
    Running,

    /// The job is counting down an I/O burst.
    WaitingIo,

    /// The job finished its last I/O burst and will never run again.
    Done,
}

impl Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Ready => write!(f, "READY"),
            JobState::Running => write!(f, "RUNNING"),
            JobState::WaitingIo => write!(f, "IO"),
            JobState::Done => write!(f, "DONE"),
        }
    }
}

/// The job record.
///
/// Fields are only mutated by the [`Scheduler`](crate::Scheduler); everyone
/// else gets read access through the getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub(crate) id: JobId,
    pub(crate) priority: i32,
    pub(crate) state: JobState,
    /// Ticks left in the current CPU or I/O burst.
    pub(crate) burst_countdown: usize,
    pub(crate) cpu_burst_length: usize,
    pub(crate) io_burst_length: usize,
    pub(crate) remaining_repetitions: usize,
    /// `None` when the policy has no quantum.
    pub(crate) quantum_countdown: Option<usize>,
    pub(crate) start_time: Option<Tick>,
    pub(crate) end_time: Option<Tick>,
    pub(crate) wait_time: usize,
}

impl Job {
    pub(crate) fn new(spec: &JobSpec) -> Job {
        Job {
            id: spec.id,
            priority: spec.priority,
            state: JobState::Ready,
            burst_countdown: 0,
            cpu_burst_length: spec.cpu_burst,
            io_burst_length: spec.io_burst,
            remaining_repetitions: spec.repetitions,
            quantum_countdown: None,
            start_time: None,
            end_time: None,
            wait_time: 0,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn burst_countdown(&self) -> usize {
        self.burst_countdown
    }

    pub fn cpu_burst_length(&self) -> usize {
        self.cpu_burst_length
    }

    pub fn io_burst_length(&self) -> usize {
        self.io_burst_length
    }

    pub fn remaining_repetitions(&self) -> usize {
        self.remaining_repetitions
    }

    pub fn quantum_countdown(&self) -> Option<usize> {
        self.quantum_countdown
    }

    /// Tick of the first dispatch.
    pub fn start_time(&self) -> Option<Tick> {
        self.start_time
    }

    /// Tick at which the job became [`JobState::Done`].
    pub fn end_time(&self) -> Option<Tick> {
        self.end_time
    }

    /// Number of ticks the job ended in [`JobState::Ready`].
    pub fn wait_time(&self) -> usize {
        self.wait_time
    }

    /// Whether the next dispatch starts a fresh CPU burst rather than
    /// resuming a preempted one.
    pub(crate) fn between_bursts(&self) -> bool {
        self.burst_countdown == 0
    }
}

/// The ordering rule of the ready queue.
///
/// Every scheduling algorithm is a `Policy`. The key is recomputed each
/// time a job is inserted in the ready queue; it is never cached on the job.
pub trait Policy {
    /// The algorithm name as accepted by [`Algorithm`](crate::Algorithm).
    fn name(&self) -> &'static str;

    /// The ordering key of `job` when it is inserted at tick `now`.
    ///
    /// Lower keys are dispatched first, equal keys keep insertion order.
    fn priority(&self, job: &Job, now: Tick) -> i64;

    /// The number of ticks a job may run before it is preempted.
    fn quantum(&self) -> Option<NonZeroUsize> {
        None
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn priority(&self, job: &Job, now: Tick) -> i64 {
        (**self).priority(job, now)
    }

    fn quantum(&self) -> Option<NonZeroUsize> {
        (**self).quantum()
    }
}
