use proptest::prelude::*;

/// Property tests for timeline ordering, nearest lookup, classification and
/// summary invariants.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, StressPolicy};
    use crate::models::{
        CandidateProfile, EmotionLabel, EmotionSample, EmotionScores, SessionContext, StressLevel,
    };
    use crate::summary::summarize;
    use crate::timeline::Timeline;

    fn label_strategy() -> impl Strategy<Value = EmotionLabel> {
        (0usize..EmotionLabel::ALL.len()).prop_map(|idx| EmotionLabel::ALL[idx])
    }

    fn scores_strategy() -> impl Strategy<Value = EmotionScores> {
        proptest::collection::vec(0.0f64..=1.0, EmotionLabel::ALL.len()).prop_map(|values| {
            EmotionLabel::ALL
                .into_iter()
                .zip(values)
                .fold(EmotionScores::default(), |scores, (label, value)| {
                    scores.with(label, value)
                })
        })
    }

    /// Sorted timestamps, each paired with a label so samples are distinguishable.
    fn samples_strategy() -> impl Strategy<Value = Vec<(i64, EmotionLabel, EmotionScores)>> {
        proptest::collection::vec(
            (0i64..5_000, label_strategy(), scores_strategy()),
            1..40,
        )
        .prop_map(|mut samples| {
            samples.sort_by_key(|(ts, _, _)| *ts);
            samples
        })
    }

    fn build(samples: &[(i64, EmotionLabel, EmotionScores)]) -> Vec<EmotionSample> {
        samples
            .iter()
            .map(|(ts, label, scores)| {
                EmotionSample::new(*ts, *label, *scores, None, &StressPolicy::default())
            })
            .collect()
    }

    // =========================================================================
    // Timeline ordering
    // =========================================================================
    proptest! {
        #[test]
        fn appended_order_is_preserved(raw in samples_strategy()) {
            let samples = build(&raw);
            let mut timeline = Timeline::new();
            for sample in &samples {
                prop_assert!(timeline.append(sample.clone()).is_ok());
            }

            prop_assert_eq!(timeline.all(), samples.as_slice());
            prop_assert_eq!(
                timeline.bounds().unwrap(),
                (samples[0].timestamp(), samples[samples.len() - 1].timestamp())
            );
        }
    }

    // =========================================================================
    // Nearest lookup matches a brute-force scan
    // =========================================================================
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn nearest_matches_linear_scan(raw in samples_strategy(), query in -500i64..5_500) {
            let samples = build(&raw);
            let timeline = Timeline::from_unordered(samples.clone());

            // Reference: first index with the minimal distance.
            let mut best = 0;
            for (idx, sample) in samples.iter().enumerate() {
                if sample.timestamp().abs_diff(query) < samples[best].timestamp().abs_diff(query) {
                    best = idx;
                }
            }

            let found = timeline.nearest(query).unwrap();
            prop_assert_eq!(found, &samples[best]);
            for other in &samples {
                prop_assert!(other.timestamp().abs_diff(query) >= found.timestamp().abs_diff(query));
            }
        }
    }

    // =========================================================================
    // Classification
    // =========================================================================
    proptest! {
        #[test]
        fn classify_is_deterministic_and_in_range(
            label in label_strategy(),
            scores in scores_strategy(),
        ) {
            let policy = StressPolicy::default();
            let first = classify(label, &scores, &policy);
            let second = classify(label, &scores, &policy);

            prop_assert_eq!(first, second);
            prop_assert!((1..=3).contains(&first.1));
            prop_assert_eq!(first.0.value(), first.1);
        }

        #[test]
        fn classify_is_monotonic_in_positive_intensity(
            idx in 0usize..4,
            low in 0.0f64..=1.0,
            bump in 0.0f64..=1.0,
        ) {
            let label = [
                EmotionLabel::Angry,
                EmotionLabel::Disgust,
                EmotionLabel::Fear,
                EmotionLabel::Sad,
            ][idx];
            let high = (low + bump).min(1.0);
            let policy = StressPolicy::default();

            let (_, weaker) = classify(label, &EmotionScores::default().with(label, low), &policy);
            let (_, stronger) = classify(label, &EmotionScores::default().with(label, high), &policy);
            prop_assert!(stronger >= weaker);
        }
    }

    // =========================================================================
    // Summary invariants
    // =========================================================================
    proptest! {
        #[test]
        fn summary_statistics_are_consistent(raw in samples_strategy()) {
            let samples = build(&raw);
            let timeline = Timeline::from_unordered(samples.clone());
            let context = SessionContext::new(CandidateProfile::named("Sam"));
            let summary = summarize(&timeline, &context).unwrap();

            prop_assert!(summary.average_stress >= 1.0 && summary.average_stress <= 3.0);
            prop_assert!(f64::from(summary.max_stress) >= summary.average_stress);
            prop_assert_eq!(summary.sample_count, samples.len());
            prop_assert!(summary.high_stress_count + summary.low_stress_count <= samples.len());
            prop_assert_eq!(
                summary.high_stress_count,
                samples.iter().filter(|s| s.stress_level() == StressLevel::High).count()
            );
            prop_assert!(summary.duration_secs >= 0);
        }
    }
}
