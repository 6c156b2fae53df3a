//! Product data extraction module.

mod analyzer;
pub mod rules;

pub use analyzer::{AnalysisResult, ProductAnalyzer, NO_TEXT_SENTINEL};

use crate::models::label::Label;

/// Trait for label analyzers.
pub trait LabelAnalyzer {
    /// Analyze recognized text and vision labels into a product record.
    fn analyze(&self, text: &str, labels: &[Label]) -> AnalysisResult;
}
