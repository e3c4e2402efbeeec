use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::SessionSummary;
use crate::report::narrative::NarrativeTone;
use crate::summary::DisplayZone;

pub const REPORT_TITLE: &str = "Interview Summary Report";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum ReportSection {
    Title { text: String },
    CandidateInfo { heading: String, rows: Vec<ReportRow> },
    StressStatistics { heading: String, rows: Vec<ReportRow> },
    Narrative { heading: String, tone: NarrativeTone, text: String },
    GeneratedAt { text: String },
}

/// Renderer-agnostic report content. Sections are in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContent {
    pub file_stem: String,
    pub sections: Vec<ReportSection>,
}

impl ReportContent {
    pub fn narrative_tone(&self) -> Option<NarrativeTone> {
        self.sections.iter().find_map(|section| match section {
            ReportSection::Narrative { tone, .. } => Some(*tone),
            _ => None,
        })
    }
}

pub fn compose(
    summary: &SessionSummary,
    zone: &DisplayZone,
    generated_at: DateTime<Utc>,
) -> ReportContent {
    let tone = NarrativeTone::from_average(summary.average_stress);

    let sections = vec![
        ReportSection::Title {
            text: REPORT_TITLE.to_string(),
        },
        ReportSection::CandidateInfo {
            heading: "Candidate Information".into(),
            rows: vec![
                ReportRow::new("Candidate Name", summary.candidate_name.clone()),
                ReportRow::new("Interview Date", zone.format_date(summary.started_at)),
                ReportRow::new("Interview Duration", summary.format_duration()),
            ],
        },
        ReportSection::StressStatistics {
            heading: "Stress Analysis".into(),
            rows: vec![
                ReportRow::new(
                    "Average Stress Level",
                    format!("{:.2}", summary.average_stress),
                ),
                ReportRow::new("Maximum Stress Level", summary.max_stress.to_string()),
                ReportRow::new("Dominant Emotion", summary.dominant_emotion.as_str()),
                ReportRow::new(
                    "High Stress Moments",
                    summary.high_stress_count.to_string(),
                ),
                ReportRow::new("Relaxed Moments", summary.low_stress_count.to_string()),
            ],
        },
        ReportSection::Narrative {
            heading: "Analysis Note".into(),
            tone,
            text: tone.text(&summary.candidate_name),
        },
        ReportSection::GeneratedAt {
            text: format!("Report generated on: {}", zone.format_datetime(generated_at)),
        },
    ];

    ReportContent {
        file_stem: format!("{}_interview_summary", file_safe(&summary.candidate_name)),
        sections,
    }
}

/// Candidate name reduced to characters that cannot leave the output
/// directory: path separators, dots and control characters become `_`.
fn file_safe(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

pub fn compose_now(summary: &SessionSummary, zone: &DisplayZone) -> ReportContent {
    compose(summary, zone, Utc::now())
}
