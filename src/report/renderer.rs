use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::report::composer::{ReportContent, ReportRow, ReportSection};

/// Turns composed report content into a document.
pub trait ReportRenderer {
    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, report: &ReportContent) -> Result<Vec<u8>>;

    fn file_name(&self, report: &ReportContent) -> String {
        format!("{}.{}", report.file_stem, self.extension())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    fn write_rows(out: &mut String, heading: &str, rows: &[ReportRow]) -> std::fmt::Result {
        writeln!(out, "{heading}")?;
        let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        for row in rows {
            writeln!(out, "  {:>width$}: {}", row.label, row.value, width = width)?;
        }
        writeln!(out)
    }

    fn write_report(out: &mut String, report: &ReportContent) -> std::fmt::Result {
        for section in &report.sections {
            match section {
                ReportSection::Title { text } => {
                    writeln!(out, "{text}")?;
                    writeln!(out, "{}", "=".repeat(text.len()))?;
                    writeln!(out)?;
                }
                ReportSection::CandidateInfo { heading, rows }
                | ReportSection::StressStatistics { heading, rows } => {
                    Self::write_rows(out, heading, rows)?;
                }
                ReportSection::Narrative { heading, text, .. } => {
                    writeln!(out, "{heading}:")?;
                    writeln!(out, "  {text}")?;
                    writeln!(out)?;
                }
                ReportSection::GeneratedAt { text } => {
                    writeln!(out, "{text}")?;
                }
            }
        }
        Ok(())
    }
}

impl ReportRenderer for PlainTextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &ReportContent) -> Result<Vec<u8>> {
        let mut out = String::new();
        Self::write_report(&mut out, report).context("failed to format text report")?;
        Ok(out.into_bytes())
    }
}

/// Structured JSON, for renderers living outside this process.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &ReportContent) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(report).context("failed to serialize report")
    }
}
