//! Chart-ready projections of a timeline. Nothing here mutates the timeline.

mod moment;
mod types;

pub use moment::MomentView;
pub use types::{
    Breakdown, BreakdownSlice, EmotionSeries, Gauge, GaugeBand, SeriesPoint, TimelineCharts,
};

use crate::error::EngineResult;
use crate::models::{EmotionLabel, EmotionSample, StressLevel};
use crate::timeline::Timeline;

pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 3.0;

impl TimelineCharts {
    pub fn build(timeline: &Timeline) -> EngineResult<Self> {
        let bounds = timeline.bounds()?;
        Ok(Self {
            stress: stress_series(timeline),
            emotions: emotion_series(timeline),
            bounds,
        })
    }
}

/// `(timestamp, stress_value)` in timeline order.
pub fn stress_series(timeline: &Timeline) -> Vec<SeriesPoint<u8>> {
    timeline
        .iter()
        .map(|s| SeriesPoint {
            timestamp: s.timestamp(),
            value: s.stress_value(),
        })
        .collect()
}

/// One intensity series per label, in label order. Labels that never rise
/// above zero are left out.
pub fn emotion_series(timeline: &Timeline) -> Vec<EmotionSeries> {
    EmotionLabel::ALL
        .into_iter()
        .filter(|label| timeline.iter().any(|s| s.intensities().get(*label) > 0.0))
        .map(|label| EmotionSeries {
            label,
            points: timeline
                .iter()
                .map(|s| SeriesPoint {
                    timestamp: s.timestamp(),
                    value: s.intensities().get(label),
                })
                .collect(),
        })
        .collect()
}

pub fn breakdown(sample: &EmotionSample) -> Breakdown {
    let present: Vec<(EmotionLabel, f64)> = sample
        .intensities()
        .iter()
        .filter(|(_, intensity)| *intensity > 0.0)
        .collect();

    if present.is_empty() {
        return Breakdown::NoData;
    }

    let total: f64 = present.iter().map(|(_, intensity)| intensity).sum();
    Breakdown::Slices {
        slices: present
            .into_iter()
            .map(|(label, intensity)| BreakdownSlice {
                label,
                intensity,
                share: intensity / total,
            })
            .collect(),
    }
}

pub fn gauge(sample: &EmotionSample) -> Gauge {
    let level = sample.stress_level();
    Gauge {
        min: GAUGE_MIN,
        max: GAUGE_MAX,
        // Centre of the level's band: Low 0.5, Medium 1.5, High 2.5.
        value: f64::from(sample.stress_value()) - 0.5,
        stress_value: sample.stress_value(),
        level,
        bands: gauge_bands(),
    }
}

pub fn gauge_bands() -> Vec<GaugeBand> {
    vec![
        GaugeBand {
            level: StressLevel::Low,
            from: 0.0,
            to: 1.0,
        },
        GaugeBand {
            level: StressLevel::Medium,
            from: 1.0,
            to: 2.0,
        },
        GaugeBand {
            level: StressLevel::High,
            from: 2.0,
            to: 3.0,
        },
    ]
}

/// Band containing a gauge position: Low=[0,1), Medium=[1,2), High=[2,3].
/// Positions outside the range are clamped.
pub fn band_for(value: f64) -> StressLevel {
    let value = value.clamp(GAUGE_MIN, GAUGE_MAX);
    if value < 1.0 {
        StressLevel::Low
    } else if value < 2.0 {
        StressLevel::Medium
    } else {
        StressLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::StressPolicy;
    use crate::error::EngineError;
    use crate::models::EmotionScores;

    fn sample(ts: i64, label: EmotionLabel, scores: EmotionScores) -> EmotionSample {
        EmotionSample::new(ts, label, scores, None, &StressPolicy::default())
    }

    fn timeline() -> Timeline {
        let mut timeline = Timeline::new();
        timeline
            .append(sample(
                10,
                EmotionLabel::Happy,
                EmotionScores::default()
                    .with(EmotionLabel::Happy, 0.7)
                    .with(EmotionLabel::Neutral, 0.3),
            ))
            .unwrap();
        timeline
            .append(sample(
                20,
                EmotionLabel::Angry,
                EmotionScores::default().with(EmotionLabel::Angry, 0.8),
            ))
            .unwrap();
        timeline
    }

    #[test]
    fn stress_series_follows_timeline() {
        let series = stress_series(&timeline());
        assert_eq!(
            series,
            vec![
                SeriesPoint {
                    timestamp: 10,
                    value: 1
                },
                SeriesPoint {
                    timestamp: 20,
                    value: 3
                },
            ]
        );
    }

    #[test]
    fn emotion_series_skips_silent_labels() {
        let series = emotion_series(&timeline());
        let labels: Vec<_> = series.iter().map(|s| s.label).collect();

        assert_eq!(
            labels,
            vec![EmotionLabel::Angry, EmotionLabel::Happy, EmotionLabel::Neutral]
        );
        assert_eq!(series[0].points[0].value, 0.0);
        assert_eq!(series[0].points[1].value, 0.8);
    }

    #[test]
    fn breakdown_reports_shares() {
        let timeline = timeline();
        let Breakdown::Slices { slices } = breakdown(&timeline.all()[0]) else {
            panic!("expected slices");
        };

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, EmotionLabel::Happy);
        assert!((slices[0].share - 0.7).abs() < 1e-9);
        assert!((slices[1].share - 0.3).abs() < 1e-9);
    }

    #[test]
    fn breakdown_without_scores_is_no_data() {
        let s = sample(1, EmotionLabel::Neutral, EmotionScores::default());
        assert_eq!(breakdown(&s), Breakdown::NoData);
    }

    #[test]
    fn gauge_needle_sits_in_its_own_band() {
        for s in timeline().iter() {
            let g = gauge(s);
            assert_eq!(band_for(g.value), g.level);
            assert!(g.value >= g.min && g.value <= g.max);
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(band_for(0.0), StressLevel::Low);
        assert_eq!(band_for(0.999), StressLevel::Low);
        assert_eq!(band_for(1.0), StressLevel::Medium);
        assert_eq!(band_for(2.0), StressLevel::High);
        assert_eq!(band_for(3.0), StressLevel::High);
        assert_eq!(band_for(7.0), StressLevel::High);
    }

    #[test]
    fn charts_need_samples() {
        assert_eq!(
            TimelineCharts::build(&Timeline::new()).unwrap_err(),
            EngineError::EmptyTimeline
        );
        let charts = TimelineCharts::build(&timeline()).unwrap();
        assert_eq!(charts.bounds, (10, 20));
        assert_eq!(charts.stress.len(), 2);
    }
}
