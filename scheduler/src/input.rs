use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::{Error, JobId, JobSpec, Result};

const FIELDS: [&str; 5] = ["id", "cpu burst", "io burst", "repetitions", "priority"];

/// Reads the job list stored at `path`.
pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<JobSpec>> {
    let text = fs::read_to_string(path)?;
    parse_jobs(&text)
}

/// Parses a job list.
///
/// Every line holds `id cpu_burst io_burst repetitions priority`. Blank
/// lines and lines starting with `#` are skipped.
pub fn parse_jobs(text: &str) -> Result<Vec<JobSpec>> {
    let mut jobs = vec![];

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        jobs.push(parse_line(index + 1, line)?);
    }

    Ok(jobs)
}

fn parse_line(line_number: usize, line: &str) -> Result<JobSpec> {
    let malformed = |reason: String| Error::MalformedJob {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < FIELDS.len() {
        return Err(malformed(format!(
            "missing {}",
            FIELDS[fields.len()..].join(", ")
        )));
    }
    if fields.len() > FIELDS.len() {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELDS.len(),
            fields.len()
        )));
    }

    job_spec(&fields).map_err(malformed)
}

fn job_spec(fields: &[&str]) -> std::result::Result<JobSpec, String> {
    Ok(JobSpec {
        id: JobId::new(field(fields, 0)?),
        cpu_burst: field(fields, 1)?,
        io_burst: field(fields, 2)?,
        repetitions: field(fields, 3)?,
        priority: field(fields, 4)?,
    })
}

fn field<T: FromStr>(fields: &[&str], index: usize) -> std::result::Result<T, String> {
    fields[index]
        .parse()
        .map_err(|_| format!("invalid {} `{}`", FIELDS[index], fields[index]))
}
