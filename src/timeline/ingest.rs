//! Reading a recorded detector log back into a timeline.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::normalizer::{Normalizer, RawDetection};
use crate::timeline::Timeline;

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Build a timeline from detector output, one JSON object per line.
///
/// A log has no capture clock to fall back on, so lines without a timestamp
/// are skipped along with lines that do not parse or normalize. Each skip is
/// logged. Samples are sorted into capture order.
pub fn read_detections<R: BufRead>(reader: R, normalizer: &Normalizer) -> Result<Timeline> {
    let mut samples = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read detector line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let raw = match RawDetection::from_json(&line) {
            Ok(raw) => raw,
            Err(err) => {
                log_warn!("line {}: not a detector result: {err}", line_no);
                skipped += 1;
                continue;
            }
        };

        if raw.timestamp.is_none() {
            log_warn!("line {}: no timestamp, skipping", line_no);
            skipped += 1;
            continue;
        }

        // The timestamp is present, so the capture time passed here is unused.
        match normalizer.normalize(&raw, None, 0) {
            Ok(sample) => samples.push(sample),
            Err(err) => {
                log_warn!("line {}: {err}", line_no);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log_info!("kept {} detector lines, skipped {}", samples.len(), skipped);
    }

    Ok(Timeline::from_unordered(samples))
}
