use serde::{Deserialize, Serialize};

use crate::models::SessionSummary;
use crate::summary::format::DisplayZone;

/// Summary shaped for the persistence collaborator, keyed by candidate name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub candidate_name: String,
    pub interview_date: String,
    pub interview_duration: String,
    pub avg_stress_level: f64,
    pub max_stress_level: u8,
    pub dominant_emotion: String,
    pub stress_peaks: usize,
    pub relaxed_moments: usize,
}

impl SummaryRecord {
    pub fn from_summary(summary: &SessionSummary, zone: &DisplayZone) -> Self {
        Self {
            candidate_name: summary.candidate_name.clone(),
            interview_date: zone.format_date(summary.started_at),
            interview_duration: summary.format_duration(),
            avg_stress_level: summary.average_stress,
            max_stress_level: summary.max_stress,
            dominant_emotion: summary.dominant_emotion.as_str().to_string(),
            stress_peaks: summary.high_stress_count,
            relaxed_moments: summary.low_stress_count,
        }
    }

    pub fn key(&self) -> &str {
        &self.candidate_name
    }
}
