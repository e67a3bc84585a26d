use crate::naming::{AssignedNames, NameResolution, ResolvedName};
use crate::packet::{INFERENCE_NAME_PATH, VoEventPacket};
use crate::registry::get_stream_metadata;
use crate::traits::StreamPolicy;
use crate::Result;
use fpi2nite_types::{StreamFilter, StreamKind, TimeWindow};

/// Marker for triggers the BAT pipeline could not name
const UNNAMED_TOKEN: &str = "null";

/// Swift-BAT: `Why/Inference/Name` without spaces, plus a letter from `A..H`
///
/// Every event receives a letter, the first free one for its base name, so two
/// bursts named `GRB 210911` become `GRB210911A` and `GRB210911B`.
pub struct SwiftPolicy;

impl StreamPolicy for SwiftPolicy {
    fn kind(&self) -> StreamKind {
        StreamKind::Swift
    }

    fn build_filter(&self, window: &TimeWindow) -> StreamFilter {
        get_stream_metadata(StreamKind::Swift).filter(window)
    }

    fn resolve_name(
        &self,
        packet: &VoEventPacket,
        assigned: &AssignedNames,
    ) -> Result<NameResolution> {
        let base = compact_name(&packet.required_text(INFERENCE_NAME_PATH)?);

        if base.contains(UNNAMED_TOKEN) {
            return Ok(NameResolution::Skip {
                reason: format!("unnamed trigger '{}'", base),
            });
        }

        let suffix = assigned.next_suffix(&base)?;
        Ok(NameResolution::Named(ResolvedName::suffixed(base, suffix)))
    }
}

/// Strip every space from a trigger name
pub fn compact_name(name: &str) -> String {
    name.replace(' ', "")
}
