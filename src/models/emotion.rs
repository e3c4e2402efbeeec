//! Emotion labels and per-label scores reported by the face-emotion detector.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl EmotionLabel {
    /// Fixed iteration order. Mode tie-breaks and chart ordering follow it.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Angry => "angry",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the label set.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(value))
    }

    /// Angry, disgust, fear and sad count towards stress.
    pub fn is_stress_positive(&self) -> bool {
        matches!(
            self,
            EmotionLabel::Angry | EmotionLabel::Disgust | EmotionLabel::Fear | EmotionLabel::Sad
        )
    }

    /// Label with the first letter upper-cased, as shown to reviewers.
    pub fn display_name(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    fn index(&self) -> usize {
        match self {
            EmotionLabel::Angry => 0,
            EmotionLabel::Disgust => 1,
            EmotionLabel::Fear => 2,
            EmotionLabel::Happy => 3,
            EmotionLabel::Sad => 4,
            EmotionLabel::Surprise => 5,
            EmotionLabel::Neutral => 6,
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensity in [0, 1] for every label. Labels the detector did not report hold 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub angry: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happy: f64,
    pub sad: f64,
    pub surprise: f64,
    pub neutral: f64,
}

impl EmotionScores {
    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.as_array()[label.index()]
    }

    /// Stores `value` clamped to [0, 1]; non-finite values become 0.
    pub fn set(&mut self, label: EmotionLabel, value: f64) {
        let value = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        match label {
            EmotionLabel::Angry => self.angry = value,
            EmotionLabel::Disgust => self.disgust = value,
            EmotionLabel::Fear => self.fear = value,
            EmotionLabel::Happy => self.happy = value,
            EmotionLabel::Sad => self.sad = value,
            EmotionLabel::Surprise => self.surprise = value,
            EmotionLabel::Neutral => self.neutral = value,
        }
    }

    pub fn with(mut self, label: EmotionLabel, value: f64) -> Self {
        self.set(label, value);
        self
    }

    /// `(label, score)` pairs in fixed label order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        EmotionLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    fn as_array(&self) -> [f64; 7] {
        [
            self.angry,
            self.disgust,
            self.fear,
            self.happy,
            self.sad,
            self.surprise,
            self.neutral,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(EmotionLabel::parse(" Angry "), Some(EmotionLabel::Angry));
        assert_eq!(EmotionLabel::parse("SURPRISE"), Some(EmotionLabel::Surprise));
        assert_eq!(EmotionLabel::parse("contempt"), None);
        assert_eq!(EmotionLabel::parse(""), None);
    }

    #[test]
    fn set_clamps_and_drops_non_finite() {
        let scores = EmotionScores::default()
            .with(EmotionLabel::Fear, 1.7)
            .with(EmotionLabel::Sad, -0.2)
            .with(EmotionLabel::Happy, f64::NAN);

        assert_eq!(scores.get(EmotionLabel::Fear), 1.0);
        assert_eq!(scores.get(EmotionLabel::Sad), 0.0);
        assert_eq!(scores.get(EmotionLabel::Happy), 0.0);
    }

    #[test]
    fn iter_follows_fixed_order() {
        let labels: Vec<_> = EmotionScores::default().iter().map(|(l, _)| l).collect();
        assert_eq!(labels, EmotionLabel::ALL.to_vec());
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(EmotionLabel::Neutral.display_name(), "Neutral");
    }
}
