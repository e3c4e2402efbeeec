//! Emotion and stress timeline analytics for interview review.
//!
//! Detector output is normalized into classified samples, appended to a
//! per-session `Timeline`, and later summarized, charted and reported on.

pub mod charts;
pub mod classifier;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod profiles;
pub mod report;
pub mod settings;
pub mod summary;
pub mod timeline;
pub mod utils;

#[cfg(test)]
mod tests_proptest;

pub use charts::{MomentView, TimelineCharts};
pub use classifier::{classify, StressPolicy};
pub use error::{EngineError, EngineResult};
pub use models::{
    CandidateProfile, EmotionLabel, EmotionSample, EmotionScores, ReviewerNote, SessionContext,
    SessionSummary, Snapshot, StressLevel,
};
pub use normalizer::{Normalizer, RawDetection, ScoreScale};
pub use profiles::ColumnMapping;
pub use report::{compose, NarrativeTone, ReportContent, ReportRenderer};
pub use settings::EngineSettings;
pub use summary::{summarize, DisplayZone, SummaryRecord};
pub use timeline::{read_detections, Timeline};
