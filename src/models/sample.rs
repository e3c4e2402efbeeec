//! A single classified detector observation.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::classifier::{classify, StressPolicy};
use crate::models::emotion::{EmotionLabel, EmotionScores};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }

    /// Numeric counterpart: Low=1, Medium=2, High=3.
    pub fn value(&self) -> u8 {
        match self {
            StressLevel::Low => 1,
            StressLevel::Medium => 2,
            StressLevel::High => 3,
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoded frame captured alongside a sample. Serialized as base64.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot(Vec<u8>);

impl Snapshot {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Snapshot({} bytes)", self.0.len())
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Snapshot)
            .map_err(serde::de::Error::custom)
    }
}

/// One detector observation with its derived stress signal.
///
/// Stress fields are computed on construction and have no setters, so they
/// always agree with `dominant_emotion` and `intensities`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSample {
    timestamp: i64,
    dominant_emotion: EmotionLabel,
    intensities: EmotionScores,
    stress_level: StressLevel,
    stress_value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<Snapshot>,
}

impl EmotionSample {
    pub fn new(
        timestamp: i64,
        dominant_emotion: EmotionLabel,
        intensities: EmotionScores,
        snapshot: Option<Snapshot>,
        policy: &StressPolicy,
    ) -> Self {
        let (stress_level, stress_value) = classify(dominant_emotion, &intensities, policy);
        Self {
            timestamp,
            dominant_emotion,
            intensities,
            stress_level,
            stress_value,
            snapshot,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn dominant_emotion(&self) -> EmotionLabel {
        self.dominant_emotion
    }

    pub fn intensities(&self) -> &EmotionScores {
        &self.intensities
    }

    pub fn stress_level(&self) -> StressLevel {
        self.stress_level
    }

    pub fn stress_value(&self) -> u8 {
        self.stress_value
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}
