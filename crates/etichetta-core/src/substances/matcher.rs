//! Banned substance detection over label text.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::registry::registry;

lazy_static! {
    /// E-code-shaped token: "E924", "E-924", "e102a".
    static ref E_CODE_TOKEN: Regex = Regex::new(r"(?i)\be-?\d{3}[a-z]?\b").unwrap();
}

/// Outcome of one detection pass. `found` is true exactly when `substances`
/// is non-empty; substances appear in registry order, deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Whether any banned substance was found.
    pub found: bool,

    /// Canonical names of the substances found.
    pub substances: Vec<String>,
}

/// Scan text for banned substance aliases.
///
/// The text is lowercased and trimmed, then scanned in two ways: E-code
/// tokens are collected up front and compared hyphen-insensitively against
/// each entry's codes; all other aliases are matched whole-word, so "BHA"
/// inside "ALPHABHAT" does not count. Scanning a substance stops at its
/// first matching alias; substances are independent and several may be
/// flagged. Malformed input is treated as literal text.
pub fn detect(text: &str) -> DetectionResult {
    let normalized = text.to_lowercase();
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return DetectionResult::default();
    }

    let candidates: HashSet<String> = E_CODE_TOKEN
        .find_iter(normalized)
        .map(|m| m.as_str().replace('-', ""))
        .collect();

    let mut substances = Vec::new();
    for entry in registry() {
        let code_hit = entry.e_codes().iter().any(|code| candidates.contains(code));
        if code_hit || entry.word_patterns().iter().any(|p| p.is_match(normalized)) {
            substances.push(entry.canonical.to_string());
        }
    }

    if !substances.is_empty() {
        debug!("found {} banned substance(s): {:?}", substances.len(), substances);
    }

    DetectionResult {
        found: !substances.is_empty(),
        substances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_whole_word_alias() {
        let result = detect("contains BHA preservative");
        assert!(result.found);
        assert_eq!(result.substances, vec!["Butylated hydroxyanisole".to_string()]);
    }

    #[test]
    fn test_no_match_inside_longer_word() {
        let result = detect("ALPHABHAT brand snacks");
        assert!(!result.found);
        assert!(result.substances.is_empty());
    }

    #[test]
    fn test_e_code_hyphen_insensitive() {
        for text in ["contains E-924", "contains E924"] {
            let result = detect(text);
            assert!(result.found, "no match in {text:?}");
            assert_eq!(result.substances, vec!["Potassium bromate".to_string()]);
        }
    }

    #[test]
    fn test_e_code_with_letter_suffix() {
        let result = detect("raising agent: e-924a");
        assert_eq!(result.substances, vec!["Potassium bromate".to_string()]);
    }

    #[test]
    fn test_tartrazine_by_name_and_code() {
        let result = detect("Colorant: Tartrazine (E102)");
        assert!(result.found);
        assert_eq!(result.substances, vec!["Yellow #5".to_string()]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(detect(""), DetectionResult::default());
        assert_eq!(detect("   \n\t "), DetectionResult::default());
    }

    #[test]
    fn test_multiple_substances_registry_order() {
        // BHT is listed before Yellow #5 in the registry; the text order is
        // reversed on purpose.
        let result = detect("tartrazine, then BHT");
        assert_eq!(
            result.substances,
            vec!["Butylated hydroxytoluene".to_string(), "Yellow #5".to_string()]
        );
    }

    #[test]
    fn test_substance_reported_once() {
        let result = detect("yellow 5, tartrazine, E102");
        assert_eq!(result.substances, vec!["Yellow #5".to_string()]);
    }

    #[test]
    fn test_multiword_alias() {
        let result = detect("Ingredients: brominated vegetable oil, sugar");
        assert_eq!(result.substances, vec!["Brominated vegetable oil".to_string()]);
    }

    #[test]
    fn test_e_code_not_matched_inside_word() {
        // "type102" and "e1024" are not E-code tokens.
        assert!(!detect("type102 casing, lot e1024").found);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(detect("POTASSIUM BROMATE").found);
        assert!(detect("Sodium Cyclamate").found);
    }
}
