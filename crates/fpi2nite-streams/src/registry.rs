use crate::traits::StreamPolicy;
use crate::{AsassnPolicy, FermiPolicy, SwiftPolicy};
use fpi2nite_types::{StreamFilter, StreamKind, TimeWindow};

#[derive(Debug, Clone)]
pub struct StreamMetadata {
    pub kind: StreamKind,
    pub description: &'static str,
    /// voeventdb `stream` filter; `None` searches every stream
    pub stream_tag: Option<&'static str>,
    pub ivorn_substring: &'static str,
}

impl StreamMetadata {
    pub fn filter(&self, window: &TimeWindow) -> StreamFilter {
        StreamFilter::observations(window, self.stream_tag, self.ivorn_substring)
    }
}

const STREAMS: &[StreamMetadata] = &[
    StreamMetadata {
        kind: StreamKind::Asassn,
        description: "ASAS-SN transient alerts",
        stream_tag: None,
        ivorn_substring: "ASASSN",
    },
    StreamMetadata {
        kind: StreamKind::Fermi,
        description: "Fermi-GBM final trigger positions",
        stream_tag: Some("nasa.gsfc.gcn/Fermi"),
        ivorn_substring: "GBM_Fin_Pos",
    },
    StreamMetadata {
        kind: StreamKind::Swift,
        description: "Swift-BAT GRB positions",
        stream_tag: Some("nasa.gsfc.gcn/SWIFT"),
        ivorn_substring: "BAT_GRB_Pos",
    },
];

pub fn get_stream_metadata(kind: StreamKind) -> &'static StreamMetadata {
    match kind {
        StreamKind::Asassn => &STREAMS[0],
        StreamKind::Fermi => &STREAMS[1],
        StreamKind::Swift => &STREAMS[2],
    }
}

pub fn policy_for(kind: StreamKind) -> Box<dyn StreamPolicy> {
    match kind {
        StreamKind::Asassn => Box::new(AsassnPolicy),
        StreamKind::Fermi => Box::new(FermiPolicy),
        StreamKind::Swift => Box::new(SwiftPolicy),
    }
}

/// Policies for every stream, in canonical run order
pub fn all_policies() -> Vec<Box<dyn StreamPolicy>> {
    StreamKind::ALL.into_iter().map(policy_for).collect()
}
