use crate::naming::{AssignedNames, NameResolution, ResolvedName};
use crate::packet::VoEventPacket;
use crate::registry::policy_for;
use crate::traits::StreamPolicy;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use fpi2nite_index::VoEventIndex;
use fpi2nite_types::{
    Coordinates, EventRecord, EventTable, RawPacket, StreamKind, TimeWindow,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// What to do when a single packet cannot be parsed or named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abandon the whole stream (a stream either fully succeeds or fails)
    #[default]
    Abort,
    /// Log the packet and continue with the next one
    SkipPacket,
}

/// Runs one stream: list matching IVORNs, then fetch, parse and name each packet
///
/// Archive failures always abort the run; `FailurePolicy` only governs
/// per-packet parse and naming failures.
pub struct Extractor<I> {
    index: I,
    policy: Box<dyn StreamPolicy>,
    on_failure: FailurePolicy,
}

impl<I: VoEventIndex> Extractor<I> {
    pub fn new(index: I, policy: Box<dyn StreamPolicy>) -> Self {
        Self {
            index,
            policy,
            on_failure: FailurePolicy::default(),
        }
    }

    pub fn for_stream(index: I, kind: StreamKind) -> Self {
        Self::new(index, policy_for(kind))
    }

    pub fn with_failure_policy(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }

    pub fn kind(&self) -> StreamKind {
        self.policy.kind()
    }

    /// Extract events authored in the `ndays` days before `ref_date` (default: now)
    pub fn run(&self, ndays: u32, ref_date: Option<DateTime<Utc>>) -> Result<EventTable> {
        self.run_window(&TimeWindow::lookback(ndays, ref_date)?)
    }

    pub fn run_window(&self, window: &TimeWindow) -> Result<EventTable> {
        let kind = self.kind();
        let filter = self.policy.build_filter(window);
        info!(
            stream = %kind,
            since = %filter.authored_since,
            "Searching for {} events",
            kind
        );

        let ivorns = self.index.list_ivorns(&filter)?;
        debug!(stream = %kind, candidates = ivorns.len(), "listed candidate packets");

        let mut table = EventTable::new();
        let mut assigned = AssignedNames::new();
        let mut skipped = 0usize;

        for ivorn in &ivorns {
            let raw = self.index.packet_xml(ivorn)?;

            match self.process(&raw, &assigned) {
                Ok(Some((name, coords))) => {
                    let record = EventRecord::new(name.full(), coords);
                    debug!(stream = %kind, ivorn = %ivorn, name = %record.name, "extracted event");
                    if let Some(previous) = table.insert(record) {
                        warn!(
                            stream = %kind,
                            name = %previous.name,
                            ivorn = %ivorn,
                            "duplicate event name, keeping the later packet"
                        );
                    }
                    assigned.record(&name);
                }
                Ok(None) => {}
                Err(err) => match self.on_failure {
                    FailurePolicy::Abort => {
                        return Err(Error::Packet {
                            ivorn: ivorn.clone(),
                            source: Box::new(err),
                        });
                    }
                    FailurePolicy::SkipPacket => {
                        warn!(stream = %kind, ivorn = %ivorn, error = %err, "skipping malformed packet");
                        skipped += 1;
                    }
                },
            }
        }

        info!(
            stream = %kind,
            found = table.len(),
            skipped,
            "Found {} {} events",
            table.len(),
            kind
        );
        Ok(table)
    }

    /// Number of archive records the stream's filter matches
    pub fn count(&self, window: &TimeWindow) -> Result<u64> {
        Ok(self.index.count(&self.policy.build_filter(window))?)
    }

    fn process(
        &self,
        raw: &RawPacket,
        assigned: &AssignedNames,
    ) -> Result<Option<(ResolvedName, Coordinates)>> {
        let packet = VoEventPacket::parse(raw)?;

        // Naming comes first: a skipped event is never required to carry coordinates
        let name = match self.policy.resolve_name(&packet, assigned)? {
            NameResolution::Named(name) => name,
            NameResolution::Skip { reason } => {
                debug!(stream = %self.kind(), reason = %reason, "skipping event");
                return Ok(None);
            }
        };

        let coords = packet.coordinates()?;
        Ok(Some((name, coords)))
    }
}
