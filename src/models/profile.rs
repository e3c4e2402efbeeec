//! Candidate profile and reviewer note records handed to the persistence collaborator.

use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "unknown")]
    pub email: String,
    #[serde(default = "unknown")]
    pub role: String,
    #[serde(default = "unknown")]
    pub education: String,
    #[serde(default = "unknown")]
    pub skills: String,
    #[serde(default = "unknown")]
    pub experience: String,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: unknown(),
            email: unknown(),
            role: unknown(),
            education: unknown(),
            skills: unknown(),
            experience: unknown(),
        }
    }
}

impl CandidateProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Free-text note a reviewer attaches to one moment of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerNote {
    pub candidate_name: String,
    pub timestamp: i64,
    pub text: String,
}

impl ReviewerNote {
    pub fn new(candidate_name: impl Into<String>, timestamp: i64, text: impl Into<String>) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            timestamp,
            text: text.into(),
        }
    }

    /// Storage key: one note per candidate per second.
    pub fn key(&self) -> (&str, i64) {
        (&self.candidate_name, self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_fields_default_to_unknown() {
        let profile: CandidateProfile = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.email, UNKNOWN);
        assert_eq!(profile.experience, UNKNOWN);
    }

    #[test]
    fn notes_are_keyed_by_candidate_and_second() {
        let note = ReviewerNote::new("Asha", 1_090, "hesitated on the design question");
        assert_eq!(note.key(), ("Asha", 1_090));

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["candidateName"], "Asha");
        assert_eq!(json["timestamp"], 1_090);
    }
}
