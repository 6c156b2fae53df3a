//! Production date extraction.

use super::patterns::PRODUCTION_DATE;
use super::FieldExtractor;

/// Production date extractor.
///
/// Looks for a marker token ("prod", "mfg", "manufacturing", "production")
/// followed by a date-shaped token like `01/02/2023` or `1.2.23`. The date is
/// returned as printed; the label may use either day-first or month-first
/// conventions, so no calendar interpretation is attempted.
pub struct ProductionDateExtractor;

impl ProductionDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProductionDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ProductionDateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        PRODUCTION_DATE.captures(text).map(|caps| caps[2].to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        PRODUCTION_DATE
            .captures_iter(text)
            .map(|caps| caps[2].to_string())
            .collect()
    }
}

/// Extract the first production date from label text.
pub fn extract_production_date(text: &str) -> Option<String> {
    ProductionDateExtractor::new().extract(text)
}
