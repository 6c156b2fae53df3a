//! Label analyzer assembling extraction, detection, and scoring.

use std::time::Instant;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::label::Label;
use crate::models::product::ProductRecord;
use crate::scoring;
use crate::substances;

use super::rules::{
    extract_certifications, extract_manufacturer, extract_origin, extract_product_name,
    extract_production_date, extract_serial_number,
};
use super::LabelAnalyzer;

/// Sentinel emitted by the on-device recognizer when an image has no text.
/// Treated as empty input for extraction purposes.
pub const NO_TEXT_SENTINEL: &str = "No text found in image";

/// Result of one analysis pass.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// The assembled product record.
    pub record: ProductRecord,
    /// Fields that could not be extracted.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based product label analyzer.
///
/// A pure function of `(text, labels)`: no I/O, no mutable shared state, and
/// the same inputs always produce the same record. The only shared state is
/// the static substance registry and the compiled patterns, both read-only
/// after initialization, so the analyzer is safe to call from any number of
/// concurrent callers.
pub struct ProductAnalyzer {
    /// Whether to scan for banned substance aliases.
    detect_substances: bool,
    /// Whether the product name may fall back to the best vision label.
    label_fallback: bool,
}

impl ProductAnalyzer {
    /// Create a new analyzer with default settings.
    pub fn new() -> Self {
        Self {
            detect_substances: true,
            label_fallback: true,
        }
    }

    /// Create an analyzer from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            detect_substances: config.detect_substances,
            label_fallback: config.label_name_fallback,
        }
    }

    /// Set banned substance detection.
    pub fn with_substance_detection(mut self, detect: bool) -> Self {
        self.detect_substances = detect;
        self
    }

    /// Set vision-label fallback for the product name.
    pub fn with_label_fallback(mut self, fallback: bool) -> Self {
        self.label_fallback = fallback;
        self
    }
}

impl Default for ProductAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelAnalyzer for ProductAnalyzer {
    fn analyze(&self, text: &str, labels: &[Label]) -> AnalysisResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        let text = if text.trim() == NO_TEXT_SENTINEL { "" } else { text };

        info!(
            "Analyzing {} characters of label text with {} vision labels",
            text.len(),
            labels.len()
        );

        let certifications = extract_certifications(text);
        let serial_number = extract_serial_number(text).unwrap_or_default();
        let production_date = extract_production_date(text).unwrap_or_default();
        let production_location = extract_origin(text).unwrap_or_default();
        let manufacturer = extract_manufacturer(text).unwrap_or_default();
        let name = if self.label_fallback {
            extract_product_name(text, labels)
        } else {
            extract_product_name(text, &[])
        };

        if name.is_empty() {
            warnings.push("Could not extract product name".to_string());
        }
        if manufacturer.is_empty() {
            warnings.push("Could not extract manufacturer".to_string());
        }
        if serial_number.is_empty() {
            warnings.push("Could not extract serial number".to_string());
        }
        if production_date.is_empty() {
            warnings.push("Could not extract production date".to_string());
        }

        let confidence_score = scoring::italian_origin_confidence(labels);

        let detection = if self.detect_substances {
            substances::detect(text)
        } else {
            substances::DetectionResult::default()
        };

        let record = ProductRecord {
            id: record_id(text, labels),
            name,
            manufacturer,
            production_location,
            production_date,
            serial_number,
            authenticity_code: String::new(),
            certifications,
            confidence_score,
            contains_banned_substances: detection.found,
            banned_substances_found: detection.substances,
        };

        debug!(
            "Assembled record {} (origin confidence {:.2}, authenticity {:.2}, banned: {})",
            record.id,
            record.confidence_score,
            record.authenticity_confidence(),
            record.contains_banned_substances
        );

        AnalysisResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Opaque record token derived from the analysis inputs, so identical inputs
/// produce identical records.
fn record_id(text: &str, labels: &[Label]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    for label in labels {
        hasher.update([0u8]);
        hasher.update(label.name.as_bytes());
        hasher.update(label.score.to_le_bytes());
    }
    hex::encode(&hasher.finalize()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Certification;
    use pretty_assertions::assert_eq;

    const PARMIGIANO_LABEL: &str = "Parmigiano Reggiano DOP\nby Caseificio Rossi\nserial: ABCDE12345\nprod: 01/02/2023\nMade in Italy";

    #[test]
    fn test_analyze_complete_label() {
        let analyzer = ProductAnalyzer::new();
        let labels = [Label::new("Italian cheese", 0.95)];

        let result = analyzer.analyze(PARMIGIANO_LABEL, &labels);
        let record = &result.record;

        assert_eq!(record.name, "Parmigiano Reggiano DOP");
        assert_eq!(record.manufacturer, "Caseificio Rossi");
        assert_eq!(record.certifications, vec![Certification::Dop]);
        assert_eq!(record.serial_number, "ABCDE12345");
        assert_eq!(record.production_date, "01/02/2023");
        assert_eq!(record.production_location, "Italy");
        assert!((record.confidence_score - 0.95).abs() < 1e-6);
        assert!(!record.contains_banned_substances);
        assert!(record.banned_substances_found.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_analyze_flags_banned_substance() {
        let analyzer = ProductAnalyzer::new();
        let result = analyzer.analyze("Ingredients: flour, Tartrazine (E102), salt", &[]);

        assert!(result.record.contains_banned_substances);
        assert_eq!(
            result.record.banned_substances_found,
            vec!["Yellow #5".to_string()]
        );
    }

    #[test]
    fn test_banned_flag_matches_list() {
        let analyzer = ProductAnalyzer::new();
        for text in ["", "clean product label", "contains BHT"] {
            let record = analyzer.analyze(text, &[]).record;
            assert_eq!(
                record.contains_banned_substances,
                !record.banned_substances_found.is_empty()
            );
        }
    }

    #[test]
    fn test_analyze_idempotent() {
        let analyzer = ProductAnalyzer::new();
        let labels = [Label::new("Italian cheese", 0.95)];

        let first = analyzer.analyze(PARMIGIANO_LABEL, &labels);
        let second = analyzer.analyze(PARMIGIANO_LABEL, &labels);
        assert_eq!(first.record, second.record);
    }

    #[test]
    fn test_distinct_inputs_distinct_ids() {
        let analyzer = ProductAnalyzer::new();
        let a = analyzer.analyze("Gorgonzola DOP", &[]);
        let b = analyzer.analyze("Taleggio DOP", &[]);
        assert_ne!(a.record.id, b.record.id);
    }

    #[test]
    fn test_no_text_sentinel_treated_as_empty() {
        let analyzer = ProductAnalyzer::new();
        let labels = [Label::new("Italian leather", 0.8)];

        let record = analyzer.analyze(NO_TEXT_SENTINEL, &labels).record;
        // Extraction sees empty text; the name falls back to the best label.
        assert_eq!(record.name, "Italian leather");
        assert_eq!(record.manufacturer, "");
        assert!(record.certifications.is_empty());
        assert!(!record.contains_banned_substances);
    }

    #[test]
    fn test_empty_inputs_yield_wellformed_record() {
        let analyzer = ProductAnalyzer::new();
        let result = analyzer.analyze("", &[]);
        let record = &result.record;

        assert_eq!(record.name, "");
        assert_eq!(record.confidence_score, 0.0);
        assert_eq!(record.authenticity_confidence(), 0.0);
        assert_eq!(result.warnings.len(), 4);
    }

    #[test]
    fn test_substance_detection_disabled() {
        let analyzer = ProductAnalyzer::new().with_substance_detection(false);
        let record = analyzer.analyze("contains tartrazine", &[]).record;
        assert!(!record.contains_banned_substances);
    }

    #[test]
    fn test_label_fallback_disabled() {
        let analyzer = ProductAnalyzer::new().with_label_fallback(false);
        let record = analyzer.analyze("", &[Label::new("cheese", 0.9)]).record;
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_authenticity_confidence_on_complete_record() {
        let analyzer = ProductAnalyzer::new();
        let labels = [Label::new("Italian cheese", 0.95)];
        let record = analyzer.analyze(PARMIGIANO_LABEL, &labels).record;

        // name .1 + manufacturer .1 + certs .2 + date .1 + serial .2 +
        // location .1 + 0.95 * 0.2
        assert!((record.authenticity_confidence() - 0.99).abs() < 1e-6);
    }
}
