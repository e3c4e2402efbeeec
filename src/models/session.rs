//! Session-related data models.
//!
//! - `SessionContext`: the caller-owned context a timeline belongs to.
//! - `SessionSummary`: aggregate statistics derived from a completed timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CandidateProfile, EmotionLabel};

/// Candidate + session pair a timeline is recorded for. Passed explicitly into
/// engine operations that need it; the engine keeps no session state of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub session_id: Uuid,
    pub candidate: CandidateProfile,
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(candidate: CandidateProfile) -> Self {
        Self::with_start(candidate, Utc::now())
    }

    pub fn with_start(candidate: CandidateProfile, started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            candidate,
            started_at,
        }
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate.name
    }
}

/// Session-level statistics. Recomputed from the timeline on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub candidate_name: String,
    pub session_id: Uuid,
    pub started_at: i64,
    pub ended_at: i64,
    pub duration_secs: i64,
    pub sample_count: usize,
    pub average_stress: f64,
    pub max_stress: u8,
    pub dominant_emotion: EmotionLabel,
    pub high_stress_count: usize,
    pub low_stress_count: usize,
}

impl SessionSummary {
    pub fn duration_minutes(&self) -> f64 {
        self.duration_secs as f64 / 60.0
    }

    /// Duration for display, e.g. `"1.5 minutes"`.
    pub fn format_duration(&self) -> String {
        format!("{:.1} minutes", self.duration_minutes())
    }
}
