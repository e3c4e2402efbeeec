//! Converts raw detector output into classified `EmotionSample`s.
//!
//! Missing fields are defaulted here and nowhere else: once a sample leaves the
//! normalizer every field is present and its stress signal is derived.

pub mod raw;
pub mod scale;
pub mod snapshot;

pub use raw::RawDetection;
pub use scale::ScoreScale;
pub use snapshot::{FrameEncoder, JpegFrameEncoder, SnapshotError};

use chrono::Utc;
use image::DynamicImage;

use crate::classifier::StressPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmotionLabel, EmotionSample, EmotionScores, Snapshot};
use crate::settings::EngineSettings;

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub struct Normalizer {
    policy: StressPolicy,
    scale: ScoreScale,
    encoder: Box<dyn FrameEncoder>,
}

impl Normalizer {
    pub fn new(policy: StressPolicy, encoder: Box<dyn FrameEncoder>) -> Self {
        Self {
            policy,
            scale: ScoreScale::default(),
            encoder,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(
            settings.stress_policy,
            Box::new(JpegFrameEncoder::new(settings.snapshot.jpeg_quality)),
        )
        .with_score_scale(settings.score_scale)
    }

    pub fn with_score_scale(mut self, scale: ScoreScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn policy(&self) -> &StressPolicy {
        &self.policy
    }

    /// Normalize with the current wall clock as capture time.
    pub fn normalize_now(
        &self,
        raw: &RawDetection,
        frame: Option<&DynamicImage>,
    ) -> EngineResult<EmotionSample> {
        self.normalize(raw, frame, Utc::now().timestamp())
    }

    /// Build a sample from `raw`, falling back to `captured_at` when the
    /// detector gave no timestamp.
    pub fn normalize(
        &self,
        raw: &RawDetection,
        frame: Option<&DynamicImage>,
        captured_at: i64,
    ) -> EngineResult<EmotionSample> {
        if raw.dominant_emotion.is_none()
            && !raw.has_scores()
            && raw.timestamp.is_none()
            && frame.is_none()
        {
            return Err(EngineError::malformed(
                "no emotion, scores, timestamp or frame",
            ));
        }

        let timestamp = raw.timestamp_secs()?.unwrap_or(captured_at);
        let dominant = resolve_dominant(raw.dominant_emotion.as_deref());
        let intensities = normalize_scores(raw, self.scale);
        let snapshot = frame.and_then(|frame| self.encode_snapshot(frame, timestamp));

        Ok(EmotionSample::new(
            timestamp,
            dominant,
            intensities,
            snapshot,
            &self.policy,
        ))
    }

    fn encode_snapshot(&self, frame: &DynamicImage, timestamp: i64) -> Option<Snapshot> {
        match self.encoder.encode(frame) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log_warn!("snapshot dropped for sample at {}: {err}", timestamp);
                None
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StressPolicy::default(), Box::new(JpegFrameEncoder::default()))
    }
}

fn resolve_dominant(value: Option<&str>) -> EmotionLabel {
    match value {
        Some(label) => EmotionLabel::parse(label).unwrap_or_else(|| {
            log_info!("unrecognized dominant emotion '{}', using neutral", label);
            EmotionLabel::Neutral
        }),
        None => EmotionLabel::Neutral,
    }
}

fn normalize_scores(raw: &RawDetection, scale: ScoreScale) -> EmotionScores {
    let mut scores = EmotionScores::default();
    let Some(reported) = raw.emotion.as_ref() else {
        return scores;
    };

    let divisor = scale.divisor(reported.values().copied());

    for (key, value) in reported {
        if let Some(label) = EmotionLabel::parse(key) {
            scores.set(label, value / divisor);
        }
    }

    scores
}
