//! Banned substance registry and detection.
//!
//! The registry is a static, hand-curated table of substances banned or
//! restricted in EU/Italian food and cosmetic products, each listed under
//! every naming convention it appears as on labels: common names,
//! abbreviations, and E-codes in hyphenated and plain form.

pub mod matcher;
pub mod registry;

pub use matcher::{detect, DetectionResult};
pub use registry::{registry, SubstanceEntry};
