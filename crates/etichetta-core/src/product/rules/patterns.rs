//! Common regex patterns for product label extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::product::Certification;

lazy_static! {
    /// Certification marks, in fixed evaluation order. Each pattern covers
    /// the code, its dotted abbreviation, and the full Italian name where one
    /// is in common label use.
    pub static ref CERT_PATTERNS: Vec<(Certification, Regex)> = vec![
        (
            Certification::Dop,
            Regex::new(r"(?i)\b(DOP|D\.O\.P|Denominazione di Origine Protetta)\b").unwrap(),
        ),
        (
            Certification::Igp,
            Regex::new(r"(?i)\b(IGP|I\.G\.P|Indicazione Geografica Protetta)\b").unwrap(),
        ),
        (
            Certification::Docg,
            Regex::new(r"(?i)\b(DOCG|D\.O\.C\.G)\b").unwrap(),
        ),
        (
            Certification::Doc,
            Regex::new(r"(?i)\b(DOC|D\.O\.C)\b").unwrap(),
        ),
        (
            Certification::Stg,
            Regex::new(r"(?i)\b(STG|S\.T\.G|Specialità Tradizionale Garantita)\b").unwrap(),
        ),
        (
            Certification::Bio,
            Regex::new(r"(?i)\b(BIO|Biologico|Organic|Organico)\b").unwrap(),
        ),
    ];

    // Serial number after a marker token: "serial: ABCDE12345", "S/N 12345X".
    pub static ref SERIAL_NUMBER: Regex = Regex::new(
        r"(?i)(serial|s/n|series|code)[:\s]*(\w{5,})"
    ).unwrap();

    // Production date after a marker token: "prod: 01/02/2023", "MFG 1.2.23".
    pub static ref PRODUCTION_DATE: Regex = Regex::new(
        r"(?i)(prod|mfg|manufacturing|production)[ :.\-]*(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})"
    ).unwrap();

    // Literal origin phrases. Presence sets the location to "Italy".
    pub static ref MADE_IN_ITALY: Regex = Regex::new(
        r"(?i)(made in italy|prodotto in italia|fabbricato in italia)"
    ).unwrap();

    // Manufacturer patterns: "by Caseificio Rossi" and "Caseificio Rossi srl".
    // The capture is a run of capitalized words on one line.
    pub static ref MANUFACTURER_BY: Regex = Regex::new(
        r"\b(?i:by)\s+([A-Z][A-Za-z]+(?:[ \t]+[A-Z][A-Za-z]+)*)"
    ).unwrap();

    pub static ref MANUFACTURER_SUFFIX: Regex = Regex::new(
        r"([A-Z][A-Za-z]+(?:[ \t]+[A-Z][A-Za-z]+)*)\s+(?i:srl|spa|s\.p\.a\.)([^\w]|$)"
    ).unwrap();
}
