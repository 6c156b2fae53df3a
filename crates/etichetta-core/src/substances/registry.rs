//! Static registry of banned substances and their aliases.

use lazy_static::lazy_static;
use regex::Regex;

/// Raw alias table: canonical name to every naming convention the substance
/// appears under. Extending the registry means adding a row here; the matcher
/// never changes.
const SUBSTANCE_TABLE: &[(&str, &[&str])] = &[
    // Preservatives
    (
        "Potassium bromate",
        &["potassium bromate", "bromato de potasio", "E924", "E924a", "E-924", "E-924a"],
    ),
    (
        "Brominated vegetable oil",
        &["brominated vegetable oil", "BVO", "vegetable oil, brominated"],
    ),
    (
        "Azodicarbonamide",
        &["azodicarbonamide", "ADA", "azodicarboxamide", "E927", "E-927"],
    ),
    (
        "Tertiary butylhydroquinone",
        &["tertiary butylhydroquinone", "TBHQ", "tert-butylhydroquinone", "E319", "E-319"],
    ),
    (
        "Butylated hydroxyanisole",
        &["butylated hydroxyanisole", "BHA", "E320", "E-320"],
    ),
    (
        "Butylated hydroxytoluene",
        &["butylated hydroxytoluene", "BHT", "E321", "E-321"],
    ),
    // Colorants
    (
        "Yellow #5",
        &["yellow #5", "yellow 5", "tartrazine", "E102", "E-102", "FD&C Yellow No. 5", "CI 19140"],
    ),
    (
        "Yellow #6",
        &["yellow #6", "yellow 6", "sunset yellow", "E110", "E-110", "FD&C Yellow No. 6", "CI 15985"],
    ),
    (
        "Red #40",
        &["red #40", "red 40", "allura red", "E129", "E-129", "FD&C Red No. 40", "CI 16035"],
    ),
    (
        "Blue #1",
        &["blue #1", "blue 1", "brilliant blue", "E133", "E-133", "FD&C Blue No. 1", "CI 42090"],
    ),
    (
        "Blue #2",
        &["blue #2", "blue 2", "indigo carmine", "E132", "E-132", "FD&C Blue No. 2", "CI 73015"],
    ),
    (
        "Green #3",
        &["green #3", "green 3", "fast green", "E143", "E-143", "FD&C Green No. 3", "CI 42053"],
    ),
    // Other additives
    ("Potassium iodate", &["potassium iodate", "KIO3"]),
    (
        "Cyclamates",
        &["cyclamate", "cyclamates", "sodium cyclamate", "calcium cyclamate", "E952", "E-952"],
    ),
    ("Olestra", &["olestra", "olean"]),
    (
        "rBGH",
        &["rbgh", "rbst", "recombinant bovine growth hormone", "recombinant bovine somatotropin"],
    ),
];

/// A banned substance with the aliases it can appear under on a label.
///
/// Aliases are pre-compiled at registry construction: E-code-shaped aliases
/// into a normalized (lowercased, hyphen-stripped) lookup list, everything
/// else into case-insensitive whole-word patterns.
pub struct SubstanceEntry {
    /// Canonical display name, unique within the registry.
    pub canonical: &'static str,

    /// Raw alias strings as curated.
    pub aliases: &'static [&'static str],

    word_patterns: Vec<Regex>,
    e_codes: Vec<String>,
}

impl SubstanceEntry {
    fn new(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        let mut word_patterns = Vec::new();
        let mut e_codes = Vec::new();

        for alias in aliases {
            if E_CODE_ALIAS.is_match(alias) {
                e_codes.push(alias.to_lowercase().replace('-', ""));
            } else {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(alias));
                word_patterns.push(Regex::new(&pattern).unwrap());
            }
        }

        Self {
            canonical,
            aliases,
            word_patterns,
            e_codes,
        }
    }

    /// Whole-word patterns for the non-E-code aliases.
    pub(crate) fn word_patterns(&self) -> &[Regex] {
        &self.word_patterns
    }

    /// Normalized E-codes (lowercase, hyphen stripped).
    pub(crate) fn e_codes(&self) -> &[String] {
        &self.e_codes
    }
}

lazy_static! {
    static ref E_CODE_ALIAS: Regex = Regex::new(r"(?i)^e-?\d{3}[a-z]?$").unwrap();

    static ref REGISTRY: Vec<SubstanceEntry> = SUBSTANCE_TABLE
        .iter()
        .map(|&(canonical, aliases)| SubstanceEntry::new(canonical, aliases))
        .collect();
}

/// The process-wide substance registry. Read-only after initialization;
/// iteration order is the curated table order.
pub fn registry() -> &'static [SubstanceEntry] {
    &REGISTRY
}

/// Look up a registry entry by canonical name.
pub fn lookup(canonical: &str) -> Option<&'static SubstanceEntry> {
    registry().iter().find(|e| e.canonical == canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size_and_order() {
        let entries = registry();
        assert_eq!(entries.len(), 16);
        assert_eq!(entries[0].canonical, "Potassium bromate");
        assert_eq!(entries[15].canonical, "rBGH");
    }

    #[test]
    fn test_canonical_names_unique() {
        let entries = registry();
        for (i, entry) in entries.iter().enumerate() {
            assert!(
                entries[i + 1..].iter().all(|e| e.canonical != entry.canonical),
                "duplicate canonical name: {}",
                entry.canonical
            );
        }
    }

    #[test]
    fn test_e_codes_normalized() {
        let entry = lookup("Potassium bromate").unwrap();
        // E924, E924a, E-924, E-924a all normalize to hyphen-free lowercase.
        assert!(entry.e_codes().contains(&"e924".to_string()));
        assert!(entry.e_codes().contains(&"e924a".to_string()));
        assert_eq!(entry.e_codes().len(), 4);
    }

    #[test]
    fn test_non_e_code_aliases_compiled_as_words() {
        let entry = lookup("Brominated vegetable oil").unwrap();
        // No E-code exists for BVO.
        assert!(entry.e_codes().is_empty());
        assert_eq!(entry.word_patterns().len(), entry.aliases.len());
    }

    #[test]
    fn test_ci_number_is_not_an_e_code() {
        let entry = lookup("Yellow #5").unwrap();
        // "CI 19140" and "FD&C Yellow No. 5" must compile as word patterns,
        // only E102/E-102 as codes.
        assert_eq!(entry.e_codes(), &["e102".to_string(), "e102".to_string()]);
    }
}
