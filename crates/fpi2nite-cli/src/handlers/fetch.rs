use crate::args::OutputFormat;
use crate::services::writer;
use anyhow::Result;
use chrono::Utc;
use fpi2nite_index::VoEventIndex;
use fpi2nite_runtime::{RunRequest, run_streams};
use std::path::{Path, PathBuf};
use tracing::info;

/// Extract every selected stream and write the combined table
///
/// Without `outcsv` the file name is derived from the current UTC time; `-`
/// writes to stdout.
pub fn handle<I: VoEventIndex>(
    index: &I,
    request: &RunRequest,
    outcsv: Option<&Path>,
    format: OutputFormat,
    ndays: u32,
) -> Result<()> {
    let outcomes = run_streams(index, request)?;

    let target = match outcsv {
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(writer::default_output_path(Utc::now(), ndays, format))),
    };

    let written = writer::write_output(target.as_deref(), &outcomes, format)?;
    if let Some(path) = target {
        info!(path = %path.display(), events = written, "wrote events");
    }

    Ok(())
}
