//! Candidate profiles from spreadsheet rows.
//!
//! Columns are located through an explicit, versioned header mapping that is
//! checked against the sheet header up front.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CandidateProfile, UNKNOWN};

pub const CURRENT_MAPPING_VERSION: u32 = 1;

/// Sheet header for each profile field. `None` leaves that field `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnMapping {
    pub version: u32,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            version: CURRENT_MAPPING_VERSION,
            name: "Name".into(),
            email: Some("Email".into()),
            role: Some("Job role".into()),
            education: Some("Education".into()),
            skills: Some("Skills".into()),
            experience: Some("Years of experience".into()),
        }
    }
}

/// Column indices for one particular sheet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    name: usize,
    email: Option<usize>,
    role: Option<usize>,
    education: Option<usize>,
    skills: Option<usize>,
    experience: Option<usize>,
}

impl ColumnMapping {
    pub fn validate(&self) -> EngineResult<()> {
        if self.version != CURRENT_MAPPING_VERSION {
            return Err(EngineError::UnsupportedMappingVersion {
                found: self.version,
                supported: CURRENT_MAPPING_VERSION,
            });
        }
        Ok(())
    }

    /// Locate every mapped column in `headers`. An unknown mapping version or
    /// any mapped column that is missing is an error; nothing is guessed.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> EngineResult<ResolvedColumns> {
        self.validate()?;

        let find = |column: &str| -> EngineResult<usize> {
            headers
                .iter()
                .position(|h| h.as_ref().trim().eq_ignore_ascii_case(column.trim()))
                .ok_or_else(|| EngineError::MissingColumn {
                    column: column.to_string(),
                    version: self.version,
                })
        };
        let find_optional = |column: &Option<String>| -> EngineResult<Option<usize>> {
            column.as_deref().map(find).transpose()
        };

        Ok(ResolvedColumns {
            name: find(&self.name)?,
            email: find_optional(&self.email)?,
            role: find_optional(&self.role)?,
            education: find_optional(&self.education)?,
            skills: find_optional(&self.skills)?,
            experience: find_optional(&self.experience)?,
        })
    }

    /// Profiles for every row that has a candidate name.
    pub fn profiles<S, R>(&self, headers: &[S], rows: &[R]) -> EngineResult<Vec<CandidateProfile>>
    where
        S: AsRef<str>,
        R: AsRef<[String]>,
    {
        let columns = self.resolve(headers)?;
        Ok(rows
            .iter()
            .filter_map(|row| columns.profile(row.as_ref()))
            .collect())
    }
}

impl ResolvedColumns {
    /// `None` when the row has no usable name. Short rows and blank cells
    /// fall back to `"Unknown"`.
    pub fn profile<S: AsRef<str>>(&self, row: &[S]) -> Option<CandidateProfile> {
        let name = cell(row, Some(self.name))?;
        if name == UNKNOWN {
            return None;
        }

        let field = |idx: Option<usize>| cell(row, idx).unwrap_or_else(|| UNKNOWN.to_string());
        Some(CandidateProfile {
            name,
            email: field(self.email),
            role: field(self.role),
            education: field(self.education),
            skills: field(self.skills),
            experience: field(self.experience),
        })
    }
}

fn cell<S: AsRef<str>>(row: &[S], idx: Option<usize>) -> Option<String> {
    let value = row.get(idx?)?.as_ref().trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<&'static str> {
        vec![
            "Timestamp",
            "Name",
            "Email",
            "Education",
            "Job role",
            "Skills",
            "Years of experience",
        ]
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn maps_row_cells_to_fields() {
        let columns = ColumnMapping::default().resolve(&headers()).unwrap();
        let profile = columns
            .profile(&row(&[
                "2024-01-01",
                "Anjali",
                "anjali@example.com",
                "B.Tech",
                "Backend Engineer",
                "Rust, SQL",
                "3",
            ]))
            .unwrap();

        assert_eq!(profile.name, "Anjali");
        assert_eq!(profile.role, "Backend Engineer");
        assert_eq!(profile.experience, "3");
    }

    #[test]
    fn missing_required_column_is_reported() {
        let err = ColumnMapping::default()
            .resolve(&["Name", "Email"])
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingColumn {
                column: "Job role".into(),
                version: 1
            }
        );
    }

    #[test]
    fn unknown_mapping_version_is_rejected() {
        let mapping = ColumnMapping {
            version: 7,
            ..ColumnMapping::default()
        };

        assert_eq!(
            mapping.resolve(&headers()).unwrap_err(),
            EngineError::UnsupportedMappingVersion {
                found: 7,
                supported: CURRENT_MAPPING_VERSION
            }
        );
    }

    #[test]
    fn unmapped_fields_stay_unknown() {
        let mapping = ColumnMapping {
            email: None,
            role: None,
            education: None,
            skills: None,
            experience: None,
            ..ColumnMapping::default()
        };
        let columns = mapping.resolve(&[" name "]).unwrap();
        let profile = columns.profile(&row(&["Farah"])).unwrap();

        assert_eq!(profile.name, "Farah");
        assert_eq!(profile.email, UNKNOWN);
    }

    #[test]
    fn short_rows_and_blank_names() {
        let columns = ColumnMapping::default().resolve(&headers()).unwrap();

        let short = columns.profile(&row(&["t", "Omar", "omar@example.com"])).unwrap();
        assert_eq!(short.skills, UNKNOWN);

        assert!(columns.profile(&row(&["t", "  "])).is_none());
        assert!(columns.profile(&row(&["t"])).is_none());
    }

    #[test]
    fn profiles_skips_nameless_rows() {
        let rows = vec![
            row(&["t", "Lena", "", "", "", "", ""]),
            row(&["t", "", "x@example.com"]),
        ];
        let profiles = ColumnMapping::default().profiles(&headers(), &rows).unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].email, UNKNOWN);
    }
}
