//! Configuration structures for the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{EtichettaError, Result};

/// Main configuration for the etichetta pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EtichettaConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Scoring and classification configuration.
    pub scoring: ScoringConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Scan the text for banned substance aliases.
    pub detect_substances: bool,

    /// Fall back to the highest-scoring vision label when no plausible
    /// product name line exists in the text.
    pub label_name_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            detect_substances: true,
            label_name_fallback: true,
        }
    }
}

/// Classification band thresholds for the authenticity verdict.
///
/// These are policy constants, not derived values: scores above
/// `authentic_threshold` classify as authentic, below
/// `counterfeit_threshold` as counterfeit, anything else as unverified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Lower bound (exclusive) for an "authentic" verdict.
    pub authentic_threshold: f32,

    /// Upper bound (exclusive) for a "counterfeit" verdict.
    pub counterfeit_threshold: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            authentic_threshold: 0.7,
            counterfeit_threshold: 0.3,
        }
    }
}

impl EtichettaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| EtichettaError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| EtichettaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = EtichettaConfig::default();
        assert_eq!(config.scoring.authentic_threshold, 0.7);
        assert_eq!(config.scoring.counterfeit_threshold, 0.3);
        assert!(config.extraction.detect_substances);
    }

    #[test]
    fn test_partial_config_deserialization() {
        // Missing sections fall back to defaults.
        let config: EtichettaConfig =
            serde_json::from_str(r#"{"scoring": {"authentic_threshold": 0.8}}"#).unwrap();
        assert_eq!(config.scoring.authentic_threshold, 0.8);
        assert_eq!(config.scoring.counterfeit_threshold, 0.3);
        assert!(config.extraction.label_name_fallback);
    }
}
