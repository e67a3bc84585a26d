use crate::args::OutputFormat;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fpi2nite_runtime::StreamOutcome;
use fpi2nite_types::EventRecord;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// `fpi2nite_<YYYYMMDD_HHMMSS>_m<ndays>_day.<ext>` for the given instant
pub fn default_output_path(now: DateTime<Utc>, ndays: u32, format: OutputFormat) -> String {
    format!(
        "fpi2nite_{}_m{}_day.{}",
        now.format("%Y%m%d_%H%M%S"),
        ndays,
        format.extension()
    )
}

pub fn write_csv<W: Write>(out: &mut W, outcomes: &[StreamOutcome]) -> Result<usize> {
    let mut written = 0;
    for outcome in outcomes {
        for record in &outcome.table {
            writeln!(out, "{}", record.csv_line())?;
            written += 1;
        }
    }
    Ok(written)
}

#[derive(Serialize)]
struct JsonLine<'a> {
    stream: &'a str,
    #[serde(flatten)]
    record: &'a EventRecord,
}

pub fn write_jsonl<W: Write>(out: &mut W, outcomes: &[StreamOutcome]) -> Result<usize> {
    let mut written = 0;
    for outcome in outcomes {
        for record in &outcome.table {
            let line = JsonLine {
                stream: outcome.kind.key(),
                record,
            };
            let json = serde_json::to_string(&line)?;
            writeln!(out, "{}", json)?;
            written += 1;
        }
    }
    Ok(written)
}

/// Write all tables to `path`, or stdout when `path` is `None`
pub fn write_output(
    path: Option<&Path>,
    outcomes: &[StreamOutcome],
    format: OutputFormat,
) -> Result<usize> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let written = write_format(&mut out, outcomes, format)?;
            out.flush()?;
            Ok(written)
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let written = write_format(&mut out, outcomes, format)?;
            out.flush()?;
            Ok(written)
        }
    }
}

fn write_format<W: Write>(
    out: &mut W,
    outcomes: &[StreamOutcome],
    format: OutputFormat,
) -> Result<usize> {
    match format {
        OutputFormat::Csv => write_csv(out, outcomes),
        OutputFormat::Jsonl => write_jsonl(out, outcomes),
    }
}
