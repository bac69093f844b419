use clap::Parser;
use pretty_assertions::assert_eq;
use scheduler::{Algorithm, DEFAULT_QUANTUM};

use crate::Cli;

use super::quantum;

#[test]
pub fn file_and_algorithm() {
    let cli = Cli::try_parse_from(["cpusim", "jobs.txt", "SRTF"]).unwrap();
    assert_eq!(cli.file.to_str(), Some("jobs.txt"));
    assert_eq!(cli.algorithm, Algorithm::Srtf);
    assert!(!cli.quiet);
}

#[test]
pub fn round_robin_quantum() {
    let cli = Cli::try_parse_from(["cpusim", "jobs.txt", "RR", "--quantum", "4", "-q"]).unwrap();
    assert_eq!(cli.algorithm, Algorithm::RoundRobin);
    assert_eq!(cli.quantum, quantum(4));
    assert!(cli.quiet);
}

#[test]
pub fn default_quantum() {
    if std::env::var_os("CPUSIM_QUANTUM").is_some() {
        return;
    }
    let cli = Cli::try_parse_from(["cpusim", "jobs.txt", "RR"]).unwrap();
    assert_eq!(cli.quantum, DEFAULT_QUANTUM);
}

#[test]
pub fn rejects_unknown_algorithm() {
    let err = Cli::try_parse_from(["cpusim", "jobs.txt", "LOTTERY"]).unwrap_err();
    assert!(err.to_string().contains("unknown algorithm `LOTTERY`"));
}

#[test]
pub fn rejects_zero_quantum() {
    assert!(Cli::try_parse_from(["cpusim", "jobs.txt", "RR", "--quantum", "0"]).is_err());
}

#[test]
pub fn requires_both_arguments() {
    assert!(Cli::try_parse_from(["cpusim", "jobs.txt"]).is_err());
}
