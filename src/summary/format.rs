use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Time zone used when showing timestamps to reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayZone {
    /// Offset east of UTC, in minutes
    pub offset_minutes: i32,
    /// Suffix appended to clock times
    pub label: String,
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self {
            offset_minutes: 330,
            label: "IST".into(),
        }
    }
}

impl DisplayZone {
    pub fn utc() -> Self {
        Self {
            offset_minutes: 0,
            label: "UTC".into(),
        }
    }

    /// Falls back to UTC for offsets beyond ±24h.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix())
    }

    pub fn local(&self, timestamp: i64) -> Option<DateTime<FixedOffset>> {
        DateTime::<Utc>::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&self.offset()))
    }

    /// `HH:MM:SS <label>`, or the raw seconds if the timestamp is out of range.
    pub fn format_clock(&self, timestamp: i64) -> String {
        match self.local(timestamp) {
            Some(local) => format!("{} {}", local.format("%H:%M:%S"), self.label),
            None => timestamp.to_string(),
        }
    }

    /// `YYYY-MM-DD`, or the raw seconds if the timestamp is out of range.
    pub fn format_date(&self, timestamp: i64) -> String {
        match self.local(timestamp) {
            Some(local) => local.format("%Y-%m-%d").to_string(),
            None => timestamp.to_string(),
        }
    }

    pub fn format_datetime(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset())
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
