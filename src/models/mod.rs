pub mod emotion;
pub mod profile;
pub mod sample;
pub mod session;

pub use emotion::{EmotionLabel, EmotionScores};
pub use profile::{CandidateProfile, ReviewerNote, UNKNOWN};
pub use sample::{EmotionSample, Snapshot, StressLevel};
pub use session::{SessionContext, SessionSummary};
