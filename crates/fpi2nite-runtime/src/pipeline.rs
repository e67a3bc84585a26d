use crate::{Config, Error, Result};
use fpi2nite_index::{VoEventIndex, VoeventDbClient};
use fpi2nite_streams::{Extractor, FailurePolicy};
use fpi2nite_types::{EventTable, StreamKind, TimeWindow};
use std::collections::BTreeSet;
use tracing::info;

/// Streams requested for one run, iterated in canonical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSelection(BTreeSet<StreamKind>);

impl StreamSelection {
    pub fn all() -> Self {
        Self(StreamKind::ALL.into_iter().collect())
    }

    /// Selection from the command-line flags; no flag at all means every stream
    pub fn from_flags(asassn: bool, fermi: bool, swift: bool) -> Self {
        let selected: BTreeSet<_> = [
            (asassn, StreamKind::Asassn),
            (fermi, StreamKind::Fermi),
            (swift, StreamKind::Swift),
        ]
        .into_iter()
        .filter_map(|(on, kind)| on.then_some(kind))
        .collect();

        if selected.is_empty() {
            Self::all()
        } else {
            Self(selected)
        }
    }

    pub fn kinds(&self) -> impl Iterator<Item = StreamKind> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, kind: StreamKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub streams: StreamSelection,
    pub window: TimeWindow,
    pub on_failure: FailurePolicy,
}

/// Complete table of one stream
#[derive(Debug, Clone)]
pub struct StreamOutcome {
    pub kind: StreamKind,
    pub table: EventTable,
}

/// Archive client described by the config
pub fn connect(config: &Config) -> Result<VoeventDbClient> {
    Ok(VoeventDbClient::new(&config.index)?)
}

/// Extract every selected stream, one after another
///
/// The first failing stream ends the run with an error naming it; tables of
/// streams that already finished are discarded with it.
pub fn run_streams<I: VoEventIndex>(index: &I, request: &RunRequest) -> Result<Vec<StreamOutcome>> {
    let mut outcomes = Vec::with_capacity(request.streams.len());

    for kind in request.streams.kinds() {
        let table = Extractor::for_stream(index, kind)
            .with_failure_policy(request.on_failure)
            .run_window(&request.window)
            .map_err(|source| Error::Stream {
                stream: kind,
                source,
            })?;
        info!(stream = %kind, events = table.len(), "stream complete");
        outcomes.push(StreamOutcome { kind, table });
    }

    Ok(outcomes)
}

/// Number of matching archive records per selected stream, without fetching packets
pub fn count_streams<I: VoEventIndex>(
    index: &I,
    request: &RunRequest,
) -> Result<Vec<(StreamKind, u64)>> {
    request
        .streams
        .kinds()
        .map(|kind| {
            Extractor::for_stream(index, kind)
                .count(&request.window)
                .map(|n| (kind, n))
                .map_err(|source| Error::Stream {
                    stream: kind,
                    source,
                })
        })
        .collect()
}
