use crate::Result;
use fpi2nite_types::{RawPacket, StreamFilter};

/// Query/fetch access to a VOEvent archive
///
/// Failures are returned unmodified; implementations never retry.
pub trait VoEventIndex {
    /// IVORNs of every record matching the filter, in archive order
    fn list_ivorns(&self, filter: &StreamFilter) -> Result<Vec<String>>;

    /// Raw XML of one record
    fn packet_xml(&self, ivorn: &str) -> Result<RawPacket>;

    /// Number of records matching the filter
    fn count(&self, filter: &StreamFilter) -> Result<u64> {
        Ok(self.list_ivorns(filter)?.len() as u64)
    }
}

impl<T: VoEventIndex + ?Sized> VoEventIndex for &T {
    fn list_ivorns(&self, filter: &StreamFilter) -> Result<Vec<String>> {
        (**self).list_ivorns(filter)
    }

    fn packet_xml(&self, ivorn: &str) -> Result<RawPacket> {
        (**self).packet_xml(ivorn)
    }

    fn count(&self, filter: &StreamFilter) -> Result<u64> {
        (**self).count(filter)
    }
}
