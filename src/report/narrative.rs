use serde::Serialize;

/// Narrative chosen from the session's average stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NarrativeTone {
    High,
    Moderate,
    Low,
}

impl NarrativeTone {
    /// `> 2.5` high, `(1.5, 2.5]` moderate, `<= 1.5` low.
    pub fn from_average(average_stress: f64) -> Self {
        if average_stress > 2.5 {
            NarrativeTone::High
        } else if average_stress > 1.5 {
            NarrativeTone::Moderate
        } else {
            NarrativeTone::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeTone::High => "high stress",
            NarrativeTone::Moderate => "moderate stress",
            NarrativeTone::Low => "low stress",
        }
    }

    pub fn text(&self, candidate_name: &str) -> String {
        match self {
            NarrativeTone::High => format!(
                "{candidate_name} exhibited high stress levels throughout the interview. \
                 Consider providing more preparation or a more comfortable interview \
                 environment in the future."
            ),
            NarrativeTone::Moderate => format!(
                "{candidate_name} showed moderate stress levels with some peaks during the \
                 interview. Overall handling was adequate."
            ),
            NarrativeTone::Low => format!(
                "{candidate_name} maintained low stress levels throughout the interview, \
                 indicating good preparation and comfort with the process."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict_on_the_lower_side() {
        assert_eq!(NarrativeTone::from_average(2.6), NarrativeTone::High);
        assert_eq!(NarrativeTone::from_average(2.5), NarrativeTone::Moderate);
        assert_eq!(NarrativeTone::from_average(2.0), NarrativeTone::Moderate);
        assert_eq!(NarrativeTone::from_average(1.5), NarrativeTone::Low);
        assert_eq!(NarrativeTone::from_average(1.0), NarrativeTone::Low);
        assert_eq!(NarrativeTone::from_average(3.0), NarrativeTone::High);
    }

    #[test]
    fn text_mentions_candidate() {
        let text = NarrativeTone::Moderate.text("Meera");
        assert!(text.starts_with("Meera showed moderate stress levels"));
        assert!(!text.contains("  "));
    }
}
