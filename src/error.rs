//! Engine error types.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// The operation needs at least one sample.
    #[error("timeline has no samples")]
    EmptyTimeline,

    #[error("malformed detector sample: {0}")]
    MalformedSample(String),

    #[error("sample at {attempted} appended after {last}; timeline must stay in capture order")]
    OutOfOrderSample { last: i64, attempted: i64 },

    #[error("column '{column}' required by mapping v{version} is missing from the sheet header")]
    MissingColumn { column: String, version: u32 },

    #[error("column mapping v{found} is not supported (expected v{supported})")]
    UnsupportedMappingVersion { found: u32, supported: u32 },

    #[error("invalid stress policy: {0}")]
    InvalidPolicy(String),
}

impl EngineError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedSample(msg.into())
    }

    pub fn invalid_policy(msg: impl Into<String>) -> Self {
        Self::InvalidPolicy(msg.into())
    }
}
