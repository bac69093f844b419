use core::module_path;
use function_name::named;
use pretty_assertions::assert_eq;
use processor::format_logs;
use scheduler::{Algorithm, DEFAULT_QUANTUM};

use super::{assert_job, cpu_trace, run};

#[test]
#[named]
pub fn single_job() {
    let run = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Algorithm::Fcfs,
        DEFAULT_QUANTUM,
    );

    assert_job(&run, 1, (1, 5, 0));
    assert_eq!(cpu_trace(&run), vec![1, 1, 1, 1]);
    assert_eq!(run.report.cpu_busy_time, 5);
    assert_eq!(run.report.cpu_idle_time, 0);
}

#[test]
#[named]
pub fn two_jobs() {
    let run = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Algorithm::Fcfs,
        DEFAULT_QUANTUM,
    );

    assert_job(&run, 1, (1, 3, 0));
    assert_job(&run, 2, (4, 5, 3));
    assert_eq!(cpu_trace(&run), vec![1, 1, 1, 2]);
    assert_eq!(run.report.average_turnaround_time, 4.0);
}

#[test]
#[named]
pub fn priority_order() {
    let run = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Algorithm::Fcfs,
        DEFAULT_QUANTUM,
    );

    assert_eq!(cpu_trace(&run), vec![2, 2, 3, 3, 1]);
    assert_job(&run, 2, (1, 2, 0));
    assert_job(&run, 3, (3, 4, 2));
    assert_job(&run, 1, (5, 6, 4));
}

#[test]
#[named]
pub fn io_overlap() {
    let run = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Algorithm::Fcfs,
        DEFAULT_QUANTUM,
    );

    assert_eq!(
        format_logs(&run.logs),
        "\
│   Time   :   CPU   :    IO    │
│     1         1        xx     │
│     2         1         1     │
│     3         2         1     │
│     4         2         1     │
│     5         2        xx     │
│     6         1        xx     │
│     7         1         1     │
│     8        xx         1     │
│     9        xx         1     │
"
    );
    assert_job(&run, 1, (1, 10, 1));
    assert_job(&run, 2, (3, 5, 2));
    assert_eq!(run.report.cpu_busy_time, 7);
    assert_eq!(run.report.cpu_idle_time, 3);
    assert_eq!(run.report.average_turnaround_time, 7.5);
}
