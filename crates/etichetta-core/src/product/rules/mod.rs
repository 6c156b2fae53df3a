//! Rule-based field extractors for product label text.
//!
//! Each extractor is independent and returns an empty result rather than
//! failing when nothing matches - absence is a normal outcome.

pub mod certifications;
pub mod dates;
pub mod manufacturer;
pub mod name;
pub mod origin;
pub mod patterns;
pub mod serial;

pub use certifications::{extract_certifications, CertificationExtractor};
pub use dates::{extract_production_date, ProductionDateExtractor};
pub use manufacturer::{extract_manufacturer, ManufacturerExtractor};
pub use name::extract_product_name;
pub use origin::{extract_origin, ORIGIN_ITALY};
pub use serial::{extract_serial_number, SerialNumberExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
