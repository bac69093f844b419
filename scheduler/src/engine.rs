use std::collections::HashSet;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::ready_queue::ReadyQueue;
use crate::{Error, Job, JobId, JobSpec, JobState, Policy, Result, Tick};

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub tick: Tick,

    /// The job that ran during the tick, `None` if the CPU was idle.
    pub cpu: Option<JobId>,

    /// The jobs waiting on I/O at the end of the tick, in job list order.
    pub io: Vec<JobId>,
}

/// The scheduler core.
///
/// Owns the job table, the ready queue, the CPU and the clock. The
/// simulation is advanced one tick at a time with [`Scheduler::tick`]
/// until [`Scheduler::is_done`] returns `true`.
pub struct Scheduler {
    jobs: Vec<Job>,
    ready: ReadyQueue,
    /// Slot of the job that owns the CPU.
    running: Option<usize>,
    policy: Box<dyn Policy>,
    clock: Tick,
    cpu_busy_time: usize,
    cpu_idle_time: usize,
    finished_jobs: usize,
}

impl Scheduler {
    /// Builds the job table from `specs` and queues every job, in order.
    ///
    /// Fails if a job has an empty CPU burst or if two jobs share an id.
    pub fn new<P>(specs: &[JobSpec], policy: P) -> Result<Self>
    where
        P: Policy + 'static,
    {
        let mut ids = HashSet::with_capacity(specs.len());
        for spec in specs {
            if spec.cpu_burst == 0 {
                return Err(Error::InvalidJob {
                    id: spec.id,
                    reason: "CPU burst length must be positive",
                });
            }
            if !ids.insert(spec.id) {
                return Err(Error::DuplicateJob(spec.id));
            }
        }

        let mut scheduler = Scheduler {
            jobs: specs.iter().map(Job::new).collect(),
            ready: ReadyQueue::new(),
            running: None,
            policy: Box::new(policy),
            clock: 1,
            cpu_busy_time: 0,
            cpu_idle_time: 0,
            finished_jobs: 0,
        };
        for slot in 0..scheduler.jobs.len() {
            scheduler.push(slot);
        }

        Ok(scheduler)
    }

    /// Simulates one tick.
    ///
    /// Returns the status of the tick, or `None` if the tick finished the
    /// last job (or every job was already done, in which case nothing
    /// happens).
    pub fn tick(&mut self) -> Option<Status> {
        if self.is_done() {
            return None;
        }
        let now = self.clock;

        if self.running.is_none() {
            self.running = self.set_next_job();
        }

        let cpu = self.running.map(|slot| self.jobs[slot].id);
        match self.running {
            Some(slot) => {
                self.run(slot);
                self.cpu_busy_time += 1;
            }
            None => {
                trace!(tick = now, "cpu idle");
                self.cpu_idle_time += 1;
            }
        }

        self.age_io();

        for job in self.jobs.iter_mut().filter(|job| job.state == JobState::Ready) {
            job.wait_time += 1;
        }

        self.check_invariants();

        let status = (!self.is_done()).then(|| Status {
            tick: now,
            cpu,
            io: self.io_jobs(),
        });
        self.clock += 1;
        status
    }

    /// Gives the CPU to the job at the head of the ready queue.
    fn set_next_job(&mut self) -> Option<usize> {
        let slot = self.ready.extract_min()?;
        let now = self.clock;
        let quantum = self.policy.quantum().map(NonZeroUsize::get);

        let job = &mut self.jobs[slot];
        job.state = JobState::Running;
        if job.start_time.is_none() {
            job.start_time = Some(now);
        }
        if job.between_bursts() {
            job.burst_countdown = job.cpu_burst_length;
            job.remaining_repetitions = job.remaining_repetitions.saturating_sub(1);
        }
        job.quantum_countdown = quantum;

        debug!(tick = now, job = %job.id, burst = job.burst_countdown, "dispatch");
        Some(slot)
    }

    /// Runs the job in `slot` for one tick.
    fn run(&mut self, slot: usize) {
        let now = self.clock;
        let job = &mut self.jobs[slot];

        job.burst_countdown -= 1;
        if let Some(quantum) = job.quantum_countdown.as_mut() {
            *quantum -= 1;
        }

        if job.burst_countdown == 0 {
            debug!(tick = now, job = %job.id, io = job.io_burst_length, "cpu burst complete");
            job.state = JobState::WaitingIo;
            job.burst_countdown = job.io_burst_length;
            self.running = None;
        } else if job.quantum_countdown == Some(0) {
            debug!(tick = now, job = %job.id, left = job.burst_countdown, "quantum expired");
            job.state = JobState::Ready;
            self.running = None;
            self.push(slot);
        }
    }

    /// Counts down every I/O burst and releases the ones that are over.
    fn age_io(&mut self) {
        let now = self.clock;
        for slot in 0..self.jobs.len() {
            let job = &mut self.jobs[slot];
            if job.state != JobState::WaitingIo {
                continue;
            }
            if job.burst_countdown > 0 {
                job.burst_countdown -= 1;
                continue;
            }

            if job.remaining_repetitions == 0 {
                debug!(tick = now, job = %job.id, "done");
                job.state = JobState::Done;
                job.end_time = Some(now);
                self.finished_jobs += 1;
            } else {
                trace!(tick = now, job = %job.id, reps = job.remaining_repetitions, "io complete");
                job.state = JobState::Ready;
                self.push(slot);
            }
        }
    }

    fn push(&mut self, slot: usize) {
        let key = self.policy.priority(&self.jobs[slot], self.clock);
        self.ready.insert(slot, key);
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        let running: Vec<usize> = self
            .jobs
            .iter()
            .enumerate()
            .filter(|(_, job)| job.state == JobState::Running)
            .map(|(slot, _)| slot)
            .collect();
        debug_assert!(running.len() <= 1, "more than one job running: {running:?}");
        debug_assert_eq!(running.first().copied(), self.running);

        let ready = self
            .jobs
            .iter()
            .filter(|job| job.state == JobState::Ready)
            .count();
        debug_assert_eq!(ready, self.ready.len(), "ready queue out of sync with job states");
    }

    /// All jobs reached [`JobState::Done`]. Trivially true without jobs.
    pub fn is_done(&self) -> bool {
        self.finished_jobs == self.jobs.len()
    }

    /// The jobs in job list order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// The job that owns the CPU.
    pub fn running(&self) -> Option<&Job> {
        self.running.map(|slot| &self.jobs[slot])
    }

    pub fn io_jobs(&self) -> Vec<JobId> {
        self.jobs
            .iter()
            .filter(|job| job.state == JobState::WaitingIo)
            .map(|job| job.id)
            .collect()
    }

    /// The current value of the clock, i.e. the next tick to simulate.
    pub fn now(&self) -> Tick {
        self.clock
    }

    pub fn cpu_busy_time(&self) -> usize {
        self.cpu_busy_time
    }

    pub fn cpu_idle_time(&self) -> usize {
        self.cpu_idle_time
    }

    pub fn finished_jobs(&self) -> usize {
        self.finished_jobs
    }

    pub fn policy(&self) -> &dyn Policy {
        self.policy.as_ref()
    }
}
