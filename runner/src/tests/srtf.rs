use core::module_path;
use function_name::named;
use pretty_assertions::assert_eq;
use scheduler::{Algorithm, DEFAULT_QUANTUM};

use super::{assert_job, cpu_trace, run};

#[test]
#[named]
pub fn shortest_first() {
    let run = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Algorithm::Srtf,
        DEFAULT_QUANTUM,
    );

    assert_eq!(cpu_trace(&run), vec![2, 2, 3, 3, 3, 1, 1, 1, 1]);
    assert_job(&run, 2, (1, 2, 0));
    assert_job(&run, 3, (3, 5, 2));
    assert_job(&run, 1, (6, 10, 5));
    assert_eq!(run.report.cpu_busy_time, 10);
}

#[test]
#[named]
pub fn remaining_work_counts_repetitions() {
    let run = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Algorithm::Srtf,
        DEFAULT_QUANTUM,
    );

    // job 1 needs 2 ticks per burst but 3 bursts, so job 2 goes first
    assert_eq!(cpu_trace(&run), vec![2, 2, 2, 2, 1, 1, 1, 1, 1]);
    assert_job(&run, 2, (1, 4, 0));
    assert_job(&run, 1, (5, 10, 6));
    assert_eq!(run.report.cpu_busy_time, 10);
    assert_eq!(run.report.cpu_idle_time, 0);
}
