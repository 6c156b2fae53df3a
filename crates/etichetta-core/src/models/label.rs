//! Vision label model.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A (description, confidence) pair produced by an image classification
/// service. Unrelated to the printed label being analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Label description, e.g. "Italian cheese".
    ///
    /// Accepts `description` as an alias so the decoded entries of a cloud
    /// vision `labelAnnotations` array deserialize directly.
    #[serde(alias = "description")]
    pub name: String,

    /// Classifier confidence (0.0 - 1.0).
    pub score: f32,
}

impl Label {
    /// Create a new label.
    pub fn new(name: impl Into<String>, score: f32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Parse labels from a JSON array of `{"name": ..., "score": ...}` objects.
pub fn parse_labels(json: &str) -> Result<Vec<Label>> {
    Ok(serde_json::from_str(json)?)
}
