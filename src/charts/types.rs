use serde::Serialize;

use crate::models::{EmotionLabel, StressLevel};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint<T> {
    pub timestamp: i64,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSeries {
    pub label: EmotionLabel,
    pub points: Vec<SeriesPoint<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownSlice {
    pub label: EmotionLabel,
    pub intensity: f64,
    /// Fraction of the summed intensities, in [0, 1]
    pub share: f64,
}

/// Emotion proportions at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Breakdown {
    Slices { slices: Vec<BreakdownSlice> },
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub level: StressLevel,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gauge {
    pub min: f64,
    pub max: f64,
    /// Needle position, always inside the band of `level`
    pub value: f64,
    pub stress_value: u8,
    pub level: StressLevel,
    pub bands: Vec<GaugeBand>,
}

/// All timeline-wide chart series for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineCharts {
    pub stress: Vec<SeriesPoint<u8>>,
    pub emotions: Vec<EmotionSeries>,
    pub bounds: (i64, i64),
}
