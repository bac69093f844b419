//! The scheduling algorithms.
//!
//! Each algorithm is a [`Policy`] in its own file. [`Algorithm`] selects
//! one of them by name.

use std::fmt::{self, Display};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::{Error, Policy};

mod fcfs;
pub use fcfs::Fcfs;

mod srtf;
pub use srtf::Srtf;

mod round_robin;
pub use round_robin::RoundRobin;

/// The quantum used by round robin when none is configured.
pub const DEFAULT_QUANTUM: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(quantum) => quantum,
    None => panic!("quantum must be non-zero"),
};

/// The scheduling algorithm selected by the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Srtf,
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Srtf, Algorithm::RoundRobin];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Builds the policy for this algorithm.
    ///
    /// `quantum` is only used by round robin.
    pub fn policy(self, quantum: NonZeroUsize) -> Box<dyn Policy> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
