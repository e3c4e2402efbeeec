use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView};
use thiserror::Error;

use crate::models::Snapshot;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("frame has no pixels ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("frame encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Turns a captured frame into snapshot bytes.
pub trait FrameEncoder: Send + Sync {
    fn encode(&self, frame: &DynamicImage) -> Result<Snapshot, SnapshotError>;
}

#[derive(Debug, Clone, Copy)]
pub struct JpegFrameEncoder {
    quality: u8,
}

impl JpegFrameEncoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

impl Default for JpegFrameEncoder {
    fn default() -> Self {
        Self::new(80)
    }
}

impl FrameEncoder for JpegFrameEncoder {
    fn encode(&self, frame: &DynamicImage) -> Result<Snapshot, SnapshotError> {
        let (width, height) = frame.dimensions();
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptyFrame { width, height });
        }

        // JPEG has no alpha channel.
        let rgb = frame.to_rgb8();
        let mut buffer = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, self.quality).encode_image(&rgb)?;
        Ok(Snapshot::new(buffer))
    }
}
