use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::classifier::StressPolicy;
use crate::normalizer::ScoreScale;
use crate::profiles::ColumnMapping;
use crate::summary::DisplayZone;

const ENABLE_LOGS: bool = true;

use crate::log_warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotSettings {
    pub jpeg_quality: u8,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self { jpeg_quality: 80 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    pub stress_policy: StressPolicy,
    pub score_scale: ScoreScale,
    pub display_zone: DisplayZone,
    pub snapshot: SnapshotSettings,
    pub columns: ColumnMapping,
}

impl EngineSettings {
    /// Read settings from `path`. A missing file yields defaults; a file that
    /// does not parse is logged and replaced by defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("ignoring unparsable settings in {}: {err}", path.display());
                Self::default()
            })
        } else {
            Self::default()
        };

        settings
            .stress_policy
            .validate()
            .with_context(|| format!("Invalid stress policy in {}", path.display()))?;
        settings
            .columns
            .validate()
            .with_context(|| format!("Invalid column mapping in {}", path.display()))?;

        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EngineSettings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"stressPolicy": {"highThreshold": 0.8}, "displayZone": {"label": "UTC", "offsetMinutes": 0}}"#,
        )
        .unwrap();

        let settings = EngineSettings::load(&path).unwrap();
        assert_eq!(settings.stress_policy.high_threshold, 0.8);
        assert_eq!(settings.stress_policy.medium_threshold, 0.3);
        assert_eq!(settings.display_zone, DisplayZone::utc());
        assert_eq!(settings.score_scale, ScoreScale::Auto);
        assert_eq!(settings.snapshot.jpeg_quality, 80);
        assert_eq!(settings.columns, ColumnMapping::default());
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(EngineSettings::load(&path).unwrap(), EngineSettings::default());
    }

    #[test]
    fn invalid_policy_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"stressPolicy": {"highThreshold": 0.2, "mediumThreshold": 0.5}}"#,
        )
        .unwrap();

        assert!(EngineSettings::load(&path).is_err());
    }

    #[test]
    fn unsupported_column_mapping_version_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"columns": {"version": 7}}"#).unwrap();

        let err = EngineSettings::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("v7"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = EngineSettings::default();
        settings.snapshot.jpeg_quality = 60;

        settings.save(&path).unwrap();
        assert_eq!(EngineSettings::load(&path).unwrap(), settings);
    }
}
