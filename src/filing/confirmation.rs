//! Confirmation number generation.
//!
//! Confirmation numbers are random and therefore generated by this
//! module alone, after assessment: the assessment itself stays
//! deterministic and never touches this code.

use uuid::Uuid;

/// Generates a confirmation number of the form `AI-<year>-XXXX-XXXX`.
///
/// The two four-character halves are drawn from a freshly generated
/// UUID, uppercased. Each call returns a new number.
///
/// # Examples
///
/// ```
/// use airs_engine::filing::generate_confirmation_number;
///
/// let number = generate_confirmation_number(2025);
/// assert!(number.starts_with("AI-2025-"));
/// assert_eq!(number.len(), 17);
/// ```
pub fn generate_confirmation_number(tax_year: i32) -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("AI-{}-{}-{}", tax_year, &hex[0..4], &hex[4..8])
}
