use crate::Result;
use crate::naming::{AssignedNames, NameResolution};
use crate::packet::VoEventPacket;
use fpi2nite_types::{StreamFilter, StreamKind, TimeWindow};

/// Stream-specific behaviour plugged into the shared extraction loop
///
/// Responsibilities:
/// - Describe which archive records belong to the stream
/// - Derive a canonical event name from a parsed packet
///
/// Implementations are stateless; collision state lives in [`AssignedNames`]
/// owned by the extractor.
pub trait StreamPolicy: Send + Sync {
    fn kind(&self) -> StreamKind;

    /// Archive filter for records authored inside `window`
    fn build_filter(&self, window: &TimeWindow) -> StreamFilter;

    /// Canonical name for the packet, or `Skip` when the event must be left out
    fn resolve_name(
        &self,
        packet: &VoEventPacket,
        assigned: &AssignedNames,
    ) -> Result<NameResolution>;
}
