use crate::Error;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Role filter value shared by every stream
pub const OBSERVATION_ROLE: &str = "observation";

/// Closed time window `[start, end]` ending at a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window covering the `ndays` days before `end`
    pub fn ending_at(end: DateTime<Utc>, ndays: u32) -> crate::Result<Self> {
        let start = Duration::try_days(i64::from(ndays))
            .and_then(|span| end.checked_sub_signed(span))
            .ok_or(Error::InvalidWindow { ndays })?;
        Ok(Self { start, end })
    }

    /// Window ending at `reference`, or at the current UTC instant when none is given
    pub fn lookback(ndays: u32, reference: Option<DateTime<Utc>>) -> crate::Result<Self> {
        Self::ending_at(reference.unwrap_or_else(Utc::now), ndays)
    }

    pub fn width(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Remote index filter describing the records in scope for one stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamFilter {
    pub role: String,
    pub authored_since: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_tag: Option<String>,
    pub ivorn_substring: String,
}

impl StreamFilter {
    pub fn observations(
        window: &TimeWindow,
        stream_tag: Option<&str>,
        ivorn_substring: impl Into<String>,
    ) -> Self {
        Self {
            role: OBSERVATION_ROLE.to_string(),
            authored_since: window.start,
            stream_tag: stream_tag.map(str::to_string),
            ivorn_substring: ivorn_substring.into(),
        }
    }

    /// Query string pairs understood by the voeventdb `apiv1` endpoints
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("role", self.role.clone()),
            (
                "authored_since",
                self.authored_since
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
        ];
        if let Some(stream) = &self.stream_tag {
            pairs.push(("stream", stream.clone()));
        }
        pairs.push(("ivorn_contains", self.ivorn_substring.clone()));
        pairs
    }

    /// Local evaluation of the filter, mirroring the server-side semantics
    pub fn admits(&self, ivorn: &str, role: &str, authored: DateTime<Utc>) -> bool {
        if role != self.role || authored < self.authored_since {
            return false;
        }
        if !ivorn.contains(&self.ivorn_substring) {
            return false;
        }
        match &self.stream_tag {
            Some(stream) => ivorn
                .strip_prefix("ivo://")
                .is_some_and(|rest| rest.split('#').next() == Some(stream.as_str())),
            None => true,
        }
    }
}
