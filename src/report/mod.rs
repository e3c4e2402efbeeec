//! Report content for the summary document. Composition does no I/O; turning
//! the content into a file is a `ReportRenderer`'s job.

pub mod composer;
pub mod narrative;
pub mod renderer;

pub use composer::{compose, compose_now, ReportContent, ReportRow, ReportSection, REPORT_TITLE};
pub use narrative::NarrativeTone;
pub use renderer::{JsonRenderer, PlainTextRenderer, ReportRenderer};
