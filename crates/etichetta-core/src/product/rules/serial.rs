//! Serial number extraction.

use super::patterns::SERIAL_NUMBER;
use super::FieldExtractor;

/// Serial number extractor.
///
/// Looks for a marker token ("serial", "s/n", "series", "code") followed by
/// an optional delimiter and a run of at least five word characters.
pub struct SerialNumberExtractor;

impl SerialNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SerialNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SerialNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        SERIAL_NUMBER.captures(text).map(|caps| caps[2].to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        SERIAL_NUMBER
            .captures_iter(text)
            .map(|caps| caps[2].to_string())
            .collect()
    }
}

/// Extract the first serial number from label text.
pub fn extract_serial_number(text: &str) -> Option<String> {
    SerialNumberExtractor::new().extract(text)
}
