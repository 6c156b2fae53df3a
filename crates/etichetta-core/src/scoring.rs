//! Confidence scoring from vision labels and field completeness.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::config::ScoringConfig;
use crate::models::label::Label;
use crate::models::product::ProductRecord;

/// Vocabulary of label words that signal Italian origin.
pub const ITALIAN_VOCABULARY: [&str; 5] =
    ["italian", "italy", "made in italy", "handcrafted", "artisan"];

// Completeness weights per extracted field.
const WEIGHT_NAME: f32 = 0.1;
const WEIGHT_MANUFACTURER: f32 = 0.1;
const WEIGHT_CERTIFICATIONS: f32 = 0.2;
const WEIGHT_PRODUCTION_DATE: f32 = 0.1;
const WEIGHT_SERIAL_NUMBER: f32 = 0.2;
const WEIGHT_LOCATION: f32 = 0.1;
const WEIGHT_AUTHENTICITY_CODE: f32 = 0.2;
const WEIGHT_LABEL_CONFIDENCE: f32 = 0.2;

/// Italian-origin confidence from vision labels.
///
/// The arithmetic mean of the scores of labels whose lowercased name contains
/// any vocabulary word - matching labels only, not all labels. Returns 0.0
/// when no label matches.
pub fn italian_origin_confidence(labels: &[Label]) -> f32 {
    let mut total = 0.0f32;
    let mut matches = 0u32;

    for label in labels {
        let name = label.name.to_lowercase();
        if ITALIAN_VOCABULARY.iter().any(|word| name.contains(word)) {
            total += label.score;
            matches += 1;
        }
    }

    if matches > 0 {
        total / matches as f32
    } else {
        0.0
    }
}

/// Authenticity confidence from field completeness.
///
/// Fixed weight per non-blank field, plus a share of the label-derived
/// Italian-origin confidence. The sum is deliberately not clamped: a fully
/// populated record with a strong label signal can score slightly above 1.0,
/// and the classification bands rely on that tail being preserved.
pub fn completeness_confidence(record: &ProductRecord) -> f32 {
    let mut score = 0.0f32;

    if !record.name.trim().is_empty() {
        score += WEIGHT_NAME;
    }
    if !record.manufacturer.trim().is_empty() {
        score += WEIGHT_MANUFACTURER;
    }
    if !record.certifications.is_empty() {
        score += WEIGHT_CERTIFICATIONS;
    }
    if !record.production_date.trim().is_empty() {
        score += WEIGHT_PRODUCTION_DATE;
    }
    if !record.serial_number.trim().is_empty() {
        score += WEIGHT_SERIAL_NUMBER;
    }
    if !record.production_location.trim().is_empty() {
        score += WEIGHT_LOCATION;
    }
    if !record.authenticity_code.trim().is_empty() {
        score += WEIGHT_AUTHENTICITY_CODE;
    }

    score + record.confidence_score * WEIGHT_LABEL_CONFIDENCE
}

/// Three-way authenticity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Confidence above the authentic threshold.
    Authentic,
    /// Confidence below the counterfeit threshold.
    Counterfeit,
    /// Anything in between.
    Unverified,
}

impl Verdict {
    /// Classify an authenticity confidence against the configured bands.
    pub fn from_score(score: f32, config: &ScoringConfig) -> Self {
        if score > config.authentic_threshold {
            Verdict::Authentic
        } else if score < config.counterfeit_threshold {
            Verdict::Counterfeit
        } else {
            Verdict::Unverified
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Authentic => "authentic",
            Verdict::Counterfeit => "counterfeit",
            Verdict::Unverified => "unverified",
        };
        f.write_str(s)
    }
}
