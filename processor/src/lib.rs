//! A processor simulation library
//!
//! This is used for driving the scheduler core from the [`scheduler`] crate
//! until every job is done, and for rendering what happened.

use std::fmt::{self, Display};

use scheduler::{JobId, Scheduler, Status, Tick};
use tracing::info;

/// The header printed above the status lines.
pub const HEADER: &str = "│   Time   :   CPU   :    IO    │";

/// Placeholder for an idle CPU or an empty I/O list.
const NONE: &str = "xx";

/// Status line of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub tick: Tick,

    /// The job that ran during the tick.
    pub cpu: Option<JobId>,

    /// The jobs waiting on I/O at the end of the tick.
    pub io: Vec<JobId>,
}

impl From<Status> for Log {
    fn from(status: Status) -> Log {
        Log {
            tick: status.tick,
            cpu: status.cpu,
            io: status.io,
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = match self.cpu {
            Some(id) => id.to_string(),
            None => NONE.to_string(),
        };
        let io = if self.io.is_empty() {
            NONE.to_string()
        } else {
            self.io
                .iter()
                .map(JobId::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "│  {:4} {:>9} {:>9}     │", self.tick, cpu, io)
    }
}

/// Timing statistics of one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStats {
    pub id: JobId,
    pub start_time: Option<Tick>,
    pub end_time: Option<Tick>,
    pub wait_time: usize,
}

/// The final report of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Per job statistics, in job list order.
    pub jobs: Vec<JobStats>,

    /// Mean of the end times. Every job arrives at time zero, so this is
    /// the mean turnaround time. Zero without jobs.
    pub average_turnaround_time: f64,

    pub cpu_busy_time: usize,
    pub cpu_idle_time: usize,
}

impl Report {
    pub fn new(scheduler: &Scheduler) -> Report {
        let jobs: Vec<JobStats> = scheduler
            .jobs()
            .iter()
            .map(|job| JobStats {
                id: job.id(),
                start_time: job.start_time(),
                end_time: job.end_time(),
                wait_time: job.wait_time(),
            })
            .collect();

        let average_turnaround_time = if jobs.is_empty() {
            0.0
        } else {
            let total: usize = jobs.iter().filter_map(|job| job.end_time).sum();
            total as f64 / jobs.len() as f64
        };

        Report {
            jobs,
            average_turnaround_time,
            cpu_busy_time: scheduler.cpu_busy_time(),
            cpu_idle_time: scheduler.cpu_idle_time(),
        }
    }

    pub fn job(&self, id: u32) -> Option<&JobStats> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn time(tick: Option<Tick>) -> String {
            tick.map_or_else(|| "-".to_string(), |tick| tick.to_string())
        }

        for job in &self.jobs {
            writeln!(f, "Process ID: {:>5}", job.id.to_string())?;
            writeln!(f, "Start Time: {:>5}", time(job.start_time))?;
            writeln!(f, "End Time:   {:>5}", time(job.end_time))?;
            writeln!(f, "Wait Time:  {:>5}", job.wait_time)?;
        }
        writeln!(
            f,
            "Average Turnaround Time: {:.2}",
            self.average_turnaround_time
        )?;
        writeln!(f, "CPU Busy Time: {}", self.cpu_busy_time)?;
        writeln!(f, "CPU Idle Time: {}", self.cpu_idle_time)
    }
}

/// Everything a simulation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// One entry per tick, except the tick that finished the last job.
    pub logs: Vec<Log>,
    pub report: Report,

    /// Number of simulated ticks.
    pub ticks: usize,
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Runs `scheduler` until every job is done.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::{parse_jobs, Scheduler};
    ///
    /// let jobs = parse_jobs("1 5 0 0 0").unwrap();
    /// let run = Processor::run(Scheduler::new(&jobs, scheduler::fcfs()).unwrap());
    ///
    /// assert_eq!(run.report.cpu_busy_time, 5);
    /// ```
    pub fn run(scheduler: Scheduler) -> Run {
        Processor::run_with(scheduler, |_| {})
    }

    /// Same as [`Processor::run`], calling `on_tick` with every status line
    /// as soon as it is produced.
    pub fn run_with<F>(mut scheduler: Scheduler, mut on_tick: F) -> Run
    where
        F: FnMut(&Log),
    {
        info!(
            algorithm = scheduler.policy().name(),
            jobs = scheduler.jobs().len(),
            "simulation started"
        );

        let mut logs = vec![];
        while !scheduler.is_done() {
            if let Some(status) = scheduler.tick() {
                let log = Log::from(status);
                on_tick(&log);
                logs.push(log);
            }
        }

        let ticks = scheduler.now() - 1;
        let report = Report::new(&scheduler);
        info!(
            ticks,
            busy = report.cpu_busy_time,
            idle = report.cpu_idle_time,
            "simulation finished"
        );

        Run {
            logs,
            report,
            ticks,
        }
    }
}

/// Format the [`Processor`]'s logs to a [`String`], header included.
///
/// * `logs` - the logs returned by the [`Processor`].
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    s.push_str(HEADER);
    s.push('\n');
    for log in logs {
        s.push_str(&log.to_string());
        s.push('\n');
    }
    s
}
