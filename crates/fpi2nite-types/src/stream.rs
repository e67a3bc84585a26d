use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source stream of transient notices
///
/// Declaration order is the canonical run order when several streams are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    Asassn,
    Fermi,
    Swift,
}

impl StreamKind {
    pub const ALL: [StreamKind; 3] = [StreamKind::Asassn, StreamKind::Fermi, StreamKind::Swift];

    /// Short key used on the command line and in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            StreamKind::Asassn => "asassn",
            StreamKind::Fermi => "fermi",
            StreamKind::Swift => "swift",
        }
    }

    /// Human-readable label for logs and error messages
    pub fn label(&self) -> &'static str {
        match self {
            StreamKind::Asassn => "ASAS-SN",
            StreamKind::Fermi => "Fermi-GBM",
            StreamKind::Swift => "Swift-BAT",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StreamKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asassn" | "asas-sn" => Ok(StreamKind::Asassn),
            "fermi" | "fermi-gbm" => Ok(StreamKind::Fermi),
            "swift" | "swift-bat" => Ok(StreamKind::Swift),
            _ => Err(crate::Error::UnknownStream(s.to_string())),
        }
    }
}
