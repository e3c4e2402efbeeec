use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Thresholds for mapping a stress-positive dominant emotion to a stress level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StressPolicy {
    /// Dominant stress-positive intensity at or above this is High
    pub high_threshold: f64,

    /// At or above this (and below `high_threshold`) is Medium; below is Low
    pub medium_threshold: f64,
}

impl Default for StressPolicy {
    fn default() -> Self {
        Self {
            high_threshold: 0.6,
            medium_threshold: 0.3,
        }
    }
}

impl StressPolicy {
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("highThreshold", self.high_threshold),
            ("mediumThreshold", self.medium_threshold),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EngineError::invalid_policy(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.medium_threshold > self.high_threshold {
            return Err(EngineError::invalid_policy(format!(
                "mediumThreshold ({}) exceeds highThreshold ({})",
                self.medium_threshold, self.high_threshold
            )));
        }

        Ok(())
    }
}
