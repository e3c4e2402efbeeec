//! Append-only, time-ordered record of the samples captured in one session.

pub mod ingest;

pub use ingest::read_detections;

use crate::error::{EngineError, EngineResult};
use crate::models::EmotionSample;

const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Samples in non-decreasing timestamp order. Samples sharing a second keep
/// their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    samples: Vec<EmotionSample>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from samples that may be out of capture order. The sort is
    /// stable, so equal timestamps keep their relative order.
    pub fn from_unordered(mut samples: Vec<EmotionSample>) -> Self {
        samples.sort_by_key(EmotionSample::timestamp);
        Self { samples }
    }

    /// Append in capture order. A sample older than the last one is rejected
    /// and the timeline is left unchanged.
    pub fn append(&mut self, sample: EmotionSample) -> EngineResult<()> {
        if let Some(last) = self.samples.last() {
            if sample.timestamp() < last.timestamp() {
                log_warn!(
                    "rejecting out-of-order sample at {} (last is {})",
                    sample.timestamp(),
                    last.timestamp()
                );
                return Err(EngineError::OutOfOrderSample {
                    last: last.timestamp(),
                    attempted: sample.timestamp(),
                });
            }
        }

        self.samples.push(sample);
        Ok(())
    }

    pub fn all(&self) -> &[EmotionSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmotionSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(first, last)` timestamps.
    pub fn bounds(&self) -> EngineResult<(i64, i64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Ok((first.timestamp(), last.timestamp())),
            _ => Err(EngineError::EmptyTimeline),
        }
    }

    /// Sample closest in time to `query`. Equidistant candidates resolve to
    /// the earlier one, and among equal timestamps to the first appended.
    pub fn nearest(&self, query: i64) -> EngineResult<&EmotionSample> {
        if self.samples.is_empty() {
            return Err(EngineError::EmptyTimeline);
        }

        // First sample at or after the query.
        let after = self.samples.partition_point(|s| s.timestamp() < query);

        let before = after
            .checked_sub(1)
            .map(|idx| self.first_with_timestamp(self.samples[idx].timestamp()));

        let index = match (before, self.samples.get(after)) {
            (Some(b), Some(a)) => {
                let before_dist = query.abs_diff(self.samples[b].timestamp());
                let after_dist = a.timestamp().abs_diff(query);
                if before_dist <= after_dist {
                    b
                } else {
                    after
                }
            }
            (Some(b), None) => b,
            (None, Some(_)) => after,
            (None, None) => return Err(EngineError::EmptyTimeline),
        };

        Ok(&self.samples[index])
    }

    fn first_with_timestamp(&self, timestamp: i64) -> usize {
        self.samples.partition_point(|s| s.timestamp() < timestamp)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a EmotionSample;
    type IntoIter = std::slice::Iter<'a, EmotionSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
