//! Origin extraction.
//!
//! This is a literal-phrase test, not a general country extractor: the label
//! either carries one of the known "made in Italy" phrasings or the origin is
//! left empty.

use super::patterns::MADE_IN_ITALY;

/// Location value reported when an origin phrase is present.
pub const ORIGIN_ITALY: &str = "Italy";

/// Extract the production origin from label text.
pub fn extract_origin(text: &str) -> Option<String> {
    MADE_IN_ITALY
        .is_match(text)
        .then(|| ORIGIN_ITALY.to_string())
}
