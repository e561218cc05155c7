//! Editor configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_YEAR;
use crate::era::Era;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("Invalid editor configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The era would shift displayed years past the representable range.
    #[error("Era offset {offset} with threshold {threshold} shifts years past {max}", max = MAX_YEAR)]
    InvalidEra { offset: u16, threshold: u16 },
}

/// Settings for a [`crate::MaskedDateEditor`]. Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Era used for the year slot.
    pub era: Era,
    /// Start the editor read-only.
    pub disabled: bool,
}

impl EditorConfig {
    /// Parses a JSON document such as `{"era": {"offset": 543, "threshold": 2400}}`.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` for malformed input and `ConfigError::InvalidEra`
    /// when shifted years would not fit in four digits.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Every civil year below the threshold must still fit in the year slot
    /// once shifted, or display and parsing stop being inverses.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidEra` when `threshold - 1 + offset > MAX_YEAR`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let highest = u32::from(self.era.threshold.saturating_sub(1)) + u32::from(self.era.offset);
        if highest > u32::from(MAX_YEAR) {
            return Err(ConfigError::InvalidEra {
                offset: self.era.offset,
                threshold: self.era.threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.era, Era::BUDDHIST);
        assert!(!config.disabled);
    }

    #[test]
    fn test_partial_document() {
        let config = EditorConfig::from_json(r#"{"disabled": true}"#).unwrap();
        assert!(config.disabled);
        assert_eq!(config.era, Era::BUDDHIST);
    }

    #[test]
    fn test_custom_era() {
        let config =
            EditorConfig::from_json(r#"{"era": {"offset": 0, "threshold": 0}}"#).unwrap();
        assert_eq!(config.era, Era::CIVIL);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EditorConfig::from_json("{disabled").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_era_past_max_year() {
        let err = EditorConfig::from_json(r#"{"era": {"offset": 600, "threshold": 9500}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEra {
                offset: 600,
                threshold: 9500
            }
        ));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = EditorConfig {
            era: Era::BUDDHIST,
            disabled: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            serde_json::from_str::<EditorConfig>(&json).unwrap(),
            config
        );
    }
}
