use crate::naming::{AssignedNames, NameResolution, ResolvedName};
use crate::packet::{Param, VoEventPacket};
use crate::registry::get_stream_metadata;
use crate::traits::StreamPolicy;
use crate::{Error, Result};
use fpi2nite_types::{StreamFilter, StreamKind, TimeWindow};

const OTHER_ID_PARAM: &str = "id_other";
const ASASSN_ID_PARAM: &str = "id_assasn";

/// ASAS-SN: the `id_other` group parameter when present, else `id_assasn`
///
/// `id_other` carries the TNS-style designation (`AT 2021abc = ...`); it wins
/// regardless of where it appears in the packet.
pub struct AsassnPolicy;

impl StreamPolicy for AsassnPolicy {
    fn kind(&self) -> StreamKind {
        StreamKind::Asassn
    }

    fn build_filter(&self, window: &TimeWindow) -> StreamFilter {
        get_stream_metadata(StreamKind::Asassn).filter(window)
    }

    fn resolve_name(
        &self,
        packet: &VoEventPacket,
        _assigned: &AssignedNames,
    ) -> Result<NameResolution> {
        let params = packet.group_params();

        let name = if let Some(param) = find_param(params, OTHER_ID_PARAM) {
            param_value(param)?.replace("= ", "")
        } else if let Some(param) = find_param(params, ASASSN_ID_PARAM) {
            param_value(param)?.to_string()
        } else {
            return Err(Error::AmbiguousName(format!(
                "neither {} nor {} present in What/Group/Param",
                OTHER_ID_PARAM, ASASSN_ID_PARAM
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::AmbiguousName(
                "identifying parameter is empty".to_string(),
            ));
        }

        Ok(NameResolution::Named(ResolvedName::plain(name)))
    }
}

fn find_param<'a>(params: &'a [Param], name: &str) -> Option<&'a Param> {
    params.iter().find(|p| p.name == name)
}

fn param_value(param: &Param) -> Result<&str> {
    param
        .value
        .as_deref()
        .ok_or_else(|| Error::MissingField(format!("What/Group/Param[@name='{}']/@value", param.name)))
}
