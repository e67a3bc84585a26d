//! In-memory archive standing in for voeventdb.

use chrono::{DateTime, Utc};
use fpi2nite_index::{Error, Result, VoEventIndex};
use fpi2nite_types::{RawPacket, StreamFilter};
use std::cell::RefCell;
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct StoredPacket {
    ivorn: String,
    role: String,
    authored: DateTime<Utc>,
    xml: String,
}

/// Archive backed by a list of packets.
///
/// `list_ivorns` applies the filter locally (role, authored_since, stream and
/// IVORN substring) and returns matches in insertion order. Every filter and
/// fetch is recorded for later assertions.
#[derive(Debug, Default)]
pub struct FakeIndex {
    packets: Vec<StoredPacket>,
    failing_fetches: HashSet<String>,
    failing_listing: bool,
    requested: RefCell<Vec<StreamFilter>>,
    fetched: RefCell<Vec<String>>,
}

impl FakeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observation packet authored at `authored`.
    pub fn with_packet(self, ivorn: &str, authored: DateTime<Utc>, xml: impl Into<String>) -> Self {
        self.with_role_packet(ivorn, "observation", authored, xml)
    }

    pub fn with_role_packet(
        mut self,
        ivorn: &str,
        role: &str,
        authored: DateTime<Utc>,
        xml: impl Into<String>,
    ) -> Self {
        self.packets.push(StoredPacket {
            ivorn: ivorn.to_string(),
            role: role.to_string(),
            authored,
            xml: xml.into(),
        });
        self
    }

    /// Make fetching this IVORN fail with an HTTP 500.
    pub fn failing_fetch(mut self, ivorn: &str) -> Self {
        self.failing_fetches.insert(ivorn.to_string());
        self
    }

    /// Make every listing call fail with an HTTP 503.
    pub fn failing_listing(mut self) -> Self {
        self.failing_listing = true;
        self
    }

    pub fn requested_filters(&self) -> Vec<StreamFilter> {
        self.requested.borrow().clone()
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }
}

impl VoEventIndex for FakeIndex {
    fn list_ivorns(&self, filter: &StreamFilter) -> Result<Vec<String>> {
        self.requested.borrow_mut().push(filter.clone());
        if self.failing_listing {
            return Err(Error::Status {
                url: "fake://list/ivorn".to_string(),
                status: 503,
            });
        }

        Ok(self
            .packets
            .iter()
            .filter(|p| filter.admits(&p.ivorn, &p.role, p.authored))
            .map(|p| p.ivorn.clone())
            .collect())
    }

    fn packet_xml(&self, ivorn: &str) -> Result<RawPacket> {
        self.fetched.borrow_mut().push(ivorn.to_string());
        if self.failing_fetches.contains(ivorn) {
            return Err(Error::Status {
                url: format!("fake://packet/xml/{}", ivorn),
                status: 500,
            });
        }

        self.packets
            .iter()
            .find(|p| p.ivorn == ivorn)
            .map(|p| RawPacket::new(p.xml.clone()))
            .ok_or_else(|| Error::UnknownIvorn(ivorn.to_string()))
    }
}
