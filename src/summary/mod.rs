//! Session-level statistics over a completed timeline.

pub mod format;
pub mod record;

pub use format::DisplayZone;
pub use record::SummaryRecord;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmotionLabel, SessionContext, SessionSummary, StressLevel};
use crate::timeline::Timeline;

/// Summarize `timeline` for the candidate in `context`.
///
/// Fails with `EmptyTimeline` rather than reporting zeros for a session
/// that recorded nothing.
pub fn summarize(timeline: &Timeline, context: &SessionContext) -> EngineResult<SessionSummary> {
    let (started_at, ended_at) = timeline.bounds()?;
    let samples = timeline.all();

    let total: u64 = samples.iter().map(|s| u64::from(s.stress_value())).sum();
    let average_stress = total as f64 / samples.len() as f64;

    let max_stress = samples
        .iter()
        .map(|s| s.stress_value())
        .max()
        .ok_or(EngineError::EmptyTimeline)?;

    let high_stress_count = samples
        .iter()
        .filter(|s| s.stress_level() == StressLevel::High)
        .count();
    let low_stress_count = samples
        .iter()
        .filter(|s| s.stress_level() == StressLevel::Low)
        .count();

    Ok(SessionSummary {
        candidate_name: context.candidate_name().to_string(),
        session_id: context.session_id,
        started_at,
        ended_at,
        duration_secs: ended_at.saturating_sub(started_at),
        sample_count: samples.len(),
        average_stress,
        max_stress,
        dominant_emotion: most_frequent_emotion(timeline),
        high_stress_count,
        low_stress_count,
    })
}

/// Mode of the dominant emotion. Ties go to the label that comes first in
/// `EmotionLabel::ALL`.
fn most_frequent_emotion(timeline: &Timeline) -> EmotionLabel {
    let mut counts = [0usize; EmotionLabel::ALL.len()];
    for sample in timeline {
        if let Some(slot) = EmotionLabel::ALL
            .iter()
            .position(|label| *label == sample.dominant_emotion())
        {
            counts[slot] += 1;
        }
    }

    let mut best = (EmotionLabel::Neutral, 0usize);
    for (label, count) in EmotionLabel::ALL.into_iter().zip(counts) {
        if count > best.1 {
            best = (label, count);
        }
    }
    best.0
}
