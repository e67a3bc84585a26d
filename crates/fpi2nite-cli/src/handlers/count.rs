use anyhow::Result;
use fpi2nite_index::VoEventIndex;
use fpi2nite_runtime::{RunRequest, count_streams};
use fpi2nite_streams::get_stream_metadata;

pub fn handle<I: VoEventIndex>(index: &I, request: &RunRequest) -> Result<()> {
    let counts = count_streams(index, request)?;

    println!(
        "Window: {} .. {}",
        request.window.start.format("%Y-%m-%dT%H:%M:%SZ"),
        request.window.end.format("%Y-%m-%dT%H:%M:%SZ")
    );
    for (kind, n) in counts {
        let meta = get_stream_metadata(kind);
        println!("{:<10} {:>6}  {}", kind.label(), n, meta.description);
    }

    Ok(())
}
