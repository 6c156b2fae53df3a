//! Manufacturer name extraction.

use super::patterns::{MANUFACTURER_BY, MANUFACTURER_SUFFIX};
use super::FieldExtractor;

/// Manufacturer name extractor.
///
/// Tries two patterns in order: "by <Name>" and "<Name> srl/spa/s.p.a.".
/// The captured name is a run of capitalized words on a single line.
pub struct ManufacturerExtractor;

impl ManufacturerExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ManufacturerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ManufacturerExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        for pattern in [&*MANUFACTURER_BY, &*MANUFACTURER_SUFFIX] {
            if let Some(caps) = pattern.captures(text) {
                return Some(caps[1].trim().to_string());
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        let mut results: Vec<String> = MANUFACTURER_BY
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect();

        for caps in MANUFACTURER_SUFFIX.captures_iter(text) {
            let name = caps[1].trim().to_string();
            if !results.contains(&name) {
                results.push(name);
            }
        }

        results
    }
}

/// Extract the manufacturer name from label text.
pub fn extract_manufacturer(text: &str) -> Option<String> {
    ManufacturerExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_pattern_multiword() {
        assert_eq!(
            extract_manufacturer("by Caseificio Rossi\nserial: X"),
            Some("Caseificio Rossi".to_string())
        );
    }

    #[test]
    fn test_by_case_insensitive_marker() {
        assert_eq!(
            extract_manufacturer("Produced BY Latteria Soresina"),
            Some("Latteria Soresina".to_string())
        );
    }

    #[test]
    fn test_suffix_pattern() {
        assert_eq!(
            extract_manufacturer("Caseificio Bianchi srl, Modena"),
            Some("Caseificio Bianchi".to_string())
        );
    }

    #[test]
    fn test_suffix_spa_at_end_of_text() {
        assert_eq!(
            extract_manufacturer("Barilla spa"),
            Some("Barilla".to_string())
        );
    }

    #[test]
    fn test_by_pattern_preferred_over_suffix() {
        let text = "by Caseificio Rossi\nDistribuzione Alimentare spa";
        assert_eq!(extract_manufacturer(text), Some("Caseificio Rossi".to_string()));
    }

    #[test]
    fn test_capture_stops_at_lowercase_word() {
        assert_eq!(
            extract_manufacturer("by Granarolo for export"),
            Some("Granarolo".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_manufacturer("no company here"), None);
        assert_eq!(extract_manufacturer(""), None);
    }

    #[test]
    fn test_extract_all_dedup() {
        let text = "by Caseificio Rossi\nCaseificio Rossi srl";
        let all = ManufacturerExtractor::new().extract_all(text);
        assert_eq!(all, vec!["Caseificio Rossi".to_string()]);
    }
}
