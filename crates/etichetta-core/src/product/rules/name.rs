//! Product name extraction.

use crate::models::label::Label;

/// Minimum plausible name length in characters.
const MIN_NAME_LEN: usize = 3;
/// Maximum plausible name length in characters.
const MAX_NAME_LEN: usize = 50;

/// Extract a product name from label text, falling back to vision labels.
///
/// The name is taken from the first three lines of text, keeping the first
/// line whose length is plausible for a product name. When no line
/// qualifies, the highest-scoring vision label is used; with no labels
/// either, the name is empty.
pub fn extract_product_name(text: &str, labels: &[Label]) -> String {
    let candidate = text
        .lines()
        .take(3)
        .find(|line| (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&line.chars().count()));

    if let Some(line) = candidate {
        return line.to_string();
    }

    labels
        .iter()
        .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
        .map(|label| label.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_plausible_line() {
        let text = "Parmigiano Reggiano DOP\nby Caseificio Rossi";
        assert_eq!(extract_product_name(text, &[]), "Parmigiano Reggiano DOP");
    }

    #[test]
    fn test_short_first_line_skipped() {
        let text = "IT\nGorgonzola Piccante\nother";
        assert_eq!(extract_product_name(text, &[]), "Gorgonzola Piccante");
    }

    #[test]
    fn test_only_first_three_lines_considered() {
        let text = "a\nb\nc\nProsciutto di Parma";
        let labels = [Label::new("ham", 0.8)];
        assert_eq!(extract_product_name(text, &labels), "ham");
    }

    #[test]
    fn test_label_fallback_picks_highest_score() {
        let labels = [
            Label::new("food", 0.5),
            Label::new("Italian cheese", 0.95),
            Label::new("dairy", 0.7),
        ];
        assert_eq!(extract_product_name("", &labels), "Italian cheese");
    }

    #[test]
    fn test_empty_text_and_labels() {
        assert_eq!(extract_product_name("", &[]), "");
    }

    #[test]
    fn test_overlong_line_rejected() {
        let long = "x".repeat(60);
        assert_eq!(extract_product_name(&long, &[]), "");
    }
}
