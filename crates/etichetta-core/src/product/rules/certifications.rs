//! Italian certification mark extraction (DOP, IGP, DOCG, DOC, STG, BIO).

use crate::models::product::Certification;

use super::patterns::CERT_PATTERNS;
use super::FieldExtractor;

/// Certification mark extractor.
pub struct CertificationExtractor;

impl CertificationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CertificationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CertificationExtractor {
    type Output = Certification;

    fn extract(&self, text: &str) -> Option<Certification> {
        self.extract_all(text).into_iter().next()
    }

    /// Returns the marks that appear anywhere in the text, ordered by the
    /// fixed evaluation order of the pattern table, not by text position.
    fn extract_all(&self, text: &str) -> Vec<Certification> {
        CERT_PATTERNS
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(cert, _)| *cert)
            .collect()
    }
}

/// Extract all certification marks from label text.
pub fn extract_certifications(text: &str) -> Vec<Certification> {
    CertificationExtractor::new().extract_all(text)
}
