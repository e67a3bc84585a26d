use crate::naming::{AssignedNames, NameResolution, ResolvedName};
use crate::packet::VoEventPacket;
use crate::registry::get_stream_metadata;
use crate::traits::StreamPolicy;
use crate::{Error, Result};
use fpi2nite_types::{StreamFilter, StreamKind, TimeWindow};

const TRIGGER_PARAM: &str = "TrigID";
const NAME_PREFIX: &str = "FermiGBM-";

/// Fermi-GBM: `FermiGBM-<TrigID>`; trigger ids are unique so no disambiguation
pub struct FermiPolicy;

impl StreamPolicy for FermiPolicy {
    fn kind(&self) -> StreamKind {
        StreamKind::Fermi
    }

    fn build_filter(&self, window: &TimeWindow) -> StreamFilter {
        get_stream_metadata(StreamKind::Fermi).filter(window)
    }

    fn resolve_name(
        &self,
        packet: &VoEventPacket,
        _assigned: &AssignedNames,
    ) -> Result<NameResolution> {
        let trigger_id = packet
            .what_params()
            .iter()
            .find(|p| p.name == TRIGGER_PARAM)
            .and_then(|p| p.value.as_deref())
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::MissingField(format!("What/Param[@name='{}']/@value", TRIGGER_PARAM))
            })?;

        Ok(NameResolution::Named(ResolvedName::plain(format!(
            "{}{}",
            NAME_PREFIX,
            trigger_id.trim()
        ))))
    }
}
