use crate::classifier::config::StressPolicy;
use crate::models::{EmotionLabel, EmotionScores, StressLevel};

/// Map a dominant emotion and its scores to `(level, value)`.
///
/// - stress-positive dominant at or above `high_threshold` → High
/// - stress-positive dominant at or above `medium_threshold`, or surprise → Medium
/// - anything else → Low
pub fn classify(
    dominant: EmotionLabel,
    intensities: &EmotionScores,
    policy: &StressPolicy,
) -> (StressLevel, u8) {
    let level = if dominant.is_stress_positive() {
        let intensity = intensities.get(dominant);
        if intensity >= policy.high_threshold {
            StressLevel::High
        } else if intensity >= policy.medium_threshold {
            StressLevel::Medium
        } else {
            StressLevel::Low
        }
    } else if dominant == EmotionLabel::Surprise {
        StressLevel::Medium
    } else {
        StressLevel::Low
    };

    (level, level.value())
}
