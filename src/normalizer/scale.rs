use serde::{Deserialize, Serialize};

/// Largest score a fraction-scaled map can carry once rounding noise is
/// allowed for. Percentage maps over seven labels always peak well above it.
const AUTO_PERCENT_ABOVE: f64 = 1.5;

/// Unit the detector reports emotion scores in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreScale {
    /// Percentages if the largest finite score exceeds 1.5, fractions otherwise.
    #[default]
    Auto,
    Fraction,
    Percent,
}

impl ScoreScale {
    /// Divisor that brings `scores` onto [0, 1].
    pub fn divisor<I>(self, scores: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        match self {
            ScoreScale::Fraction => 1.0,
            ScoreScale::Percent => 100.0,
            ScoreScale::Auto => {
                let percent = scores
                    .into_iter()
                    .any(|value| value.is_finite() && value > AUTO_PERCENT_ABOVE);
                if percent {
                    100.0
                } else {
                    1.0
                }
            }
        }
    }
}
