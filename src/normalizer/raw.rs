//! Raw detector output as it arrives from the face-emotion detector.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Per-frame detector result. Every field is optional; extra fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDetection {
    /// Seconds since epoch. Fractional seconds are truncated.
    #[serde(default)]
    pub timestamp: Option<f64>,

    #[serde(default, alias = "dominant")]
    pub dominant_emotion: Option<String>,

    /// Score per label, either fractions in [0, 1] or percentages in [0, 100].
    #[serde(default, alias = "scores")]
    pub emotion: Option<HashMap<String, f64>>,
}

impl RawDetection {
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    /// Whole seconds of the detector timestamp, `None` if absent. A value
    /// that is not a representable instant is rejected rather than clamped.
    pub fn timestamp_secs(&self) -> EngineResult<Option<i64>> {
        let Some(ts) = self.timestamp else {
            return Ok(None);
        };
        let secs = ts.floor();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if !secs.is_finite() || secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
            return Err(EngineError::malformed(format!("timestamp {ts} out of range")));
        }
        let secs = secs as i64;
        if DateTime::<Utc>::from_timestamp(secs, 0).is_none() {
            return Err(EngineError::malformed(format!("timestamp {ts} out of range")));
        }
        Ok(Some(secs))
    }

    pub fn has_scores(&self) -> bool {
        self.emotion.as_ref().is_some_and(|scores| !scores.is_empty())
    }
}
