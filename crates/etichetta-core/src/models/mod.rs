//! Data models for product label analysis.

pub mod config;
pub mod label;
pub mod product;

pub use config::{EtichettaConfig, ExtractionConfig, ScoringConfig};
pub use label::Label;
pub use product::{Certification, ProductRecord};
