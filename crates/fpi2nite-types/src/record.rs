use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw XML text of one VOEvent packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPacket(String);

impl RawPacket {
    pub fn new(xml: impl Into<String>) -> Self {
        Self(xml.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Observation instant and position extracted from a packet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub isot: String,
    pub ra: String,
    pub dec: String,
}

/// One normalized transient event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub isot: String,
    pub ra: String,
    pub dec: String,
}

impl EventRecord {
    pub fn new(name: impl Into<String>, coords: Coordinates) -> Self {
        Self {
            name: name.into(),
            isot: coords.isot,
            ra: coords.ra,
            dec: coords.dec,
        }
    }

    /// Output line without trailing newline: `<name>, <isot>, <ra>, <dec>`
    pub fn csv_line(&self) -> String {
        format!("{}, {}, {}, {}", self.name, self.isot, self.ra, self.dec)
    }
}

/// Events of one stream keyed by resolved name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    records: BTreeMap<String, EventRecord>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name; returns the record it replaced, if any
    pub fn insert(&mut self, record: EventRecord) -> Option<EventRecord> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&EventRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a EventRecord;
    type IntoIter = std::collections::btree_map::Values<'a, String, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
