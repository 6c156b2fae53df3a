//! Product data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Italian product certification marks, in fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Certification {
    /// Denominazione di Origine Protetta.
    Dop,
    /// Indicazione Geografica Protetta.
    Igp,
    /// Denominazione di Origine Controllata e Garantita.
    Docg,
    /// Denominazione di Origine Controllata.
    Doc,
    /// Specialità Tradizionale Garantita.
    Stg,
    /// Organic / biologico.
    Bio,
}

impl Certification {
    /// All certifications in evaluation order. Extraction output preserves
    /// this order regardless of where the marks appear in the text.
    pub const ALL: [Certification; 6] = [
        Certification::Dop,
        Certification::Igp,
        Certification::Docg,
        Certification::Doc,
        Certification::Stg,
        Certification::Bio,
    ];

    /// The certification code as printed on labels.
    pub fn code(&self) -> &'static str {
        match self {
            Certification::Dop => "DOP",
            Certification::Igp => "IGP",
            Certification::Docg => "DOCG",
            Certification::Doc => "DOC",
            Certification::Stg => "STG",
            Certification::Bio => "BIO",
        }
    }
}

impl fmt::Display for Certification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Structured data extracted from one product label.
///
/// Every string field is either empty or a non-blank extracted value; absence
/// of a field is a normal outcome, not a fault. Created once per analysis and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Opaque record token, derived from the analysis inputs.
    pub id: String,

    /// Product name, usually the first plausible line of label text.
    pub name: String,

    /// Manufacturer name.
    pub manufacturer: String,

    /// Production location ("Italy" when an origin phrase was found).
    pub production_location: String,

    /// Production date as printed, e.g. "01/02/2023".
    pub production_date: String,

    /// Serial number following a serial/code marker.
    pub serial_number: String,

    /// Reserved for a future anti-counterfeit code scheme; always empty.
    pub authenticity_code: String,

    /// Certification marks found on the label, in evaluation order.
    #[serde(default)]
    pub certifications: Vec<Certification>,

    /// Italian-origin confidence derived from vision labels (0.0 - 1.0).
    pub confidence_score: f32,

    /// Whether any banned substance alias was found in the text.
    pub contains_banned_substances: bool,

    /// Canonical names of banned substances found, in registry order.
    #[serde(default)]
    pub banned_substances_found: Vec<String>,
}

impl ProductRecord {
    /// Whether the record carries enough data to identify a product.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && (!self.manufacturer.trim().is_empty() || !self.authenticity_code.trim().is_empty())
    }

    /// Authenticity confidence derived from field completeness.
    ///
    /// See [`crate::scoring::completeness_confidence`] for the weights. The
    /// value is not clamped and can exceed 1.0 on fully populated records.
    pub fn authenticity_confidence(&self) -> f32 {
        crate::scoring::completeness_confidence(self)
    }
}
