//! Core library for product label analysis.
//!
//! This crate provides:
//! - Banned additive detection against an alias registry (E-codes included)
//! - Rule-based field extraction (certifications, serial number, production
//!   date, origin, product name, manufacturer)
//! - Italian-origin and authenticity confidence scoring
//! - A label analyzer assembling everything into a [`ProductRecord`]
//!
//! The library consumes the already-decoded outputs of external OCR/vision
//! services: a block of recognized text and a list of weighted image labels.
//! It performs no I/O and never fails on malformed label text - a field that
//! cannot be extracted is simply left empty.

pub mod error;
pub mod models;
pub mod product;
pub mod scoring;
pub mod substances;

pub use error::{EtichettaError, Result};
pub use models::config::EtichettaConfig;
pub use models::label::Label;
pub use models::product::{Certification, ProductRecord};
pub use product::{AnalysisResult, LabelAnalyzer, ProductAnalyzer};
pub use scoring::Verdict;
pub use substances::{detect, DetectionResult};
