use serde::Serialize;

use crate::charts::{breakdown, gauge, Breakdown, Gauge};
use crate::error::EngineResult;
use crate::models::{EmotionLabel, StressLevel};
use crate::summary::DisplayZone;
use crate::timeline::Timeline;

/// What the reviewer sees when scrubbing to a moment of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentView {
    pub requested_at: i64,
    pub timestamp: i64,
    pub clock: String,
    pub dominant_emotion: EmotionLabel,
    pub stress_level: StressLevel,
    pub has_snapshot: bool,
    pub breakdown: Breakdown,
    pub gauge: Gauge,
}

impl MomentView {
    /// View of the sample nearest to `query`.
    pub fn at(timeline: &Timeline, query: i64, zone: &DisplayZone) -> EngineResult<Self> {
        let sample = timeline.nearest(query)?;
        Ok(Self {
            requested_at: query,
            timestamp: sample.timestamp(),
            clock: zone.format_clock(sample.timestamp()),
            dominant_emotion: sample.dominant_emotion(),
            stress_level: sample.stress_level(),
            has_snapshot: sample.has_snapshot(),
            breakdown: breakdown(sample),
            gauge: gauge(sample),
        })
    }
}
