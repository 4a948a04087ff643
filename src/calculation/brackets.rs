//! Progressive bracket tax functionality.
//!
//! This module computes the marginal income tax over adjusted gross
//! income: each bracket taxes only the slice of income between the
//! previous bracket's cumulative limit and its own, never the whole
//! amount at a flat top rate.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

/// Calculates the marginal bracket tax on adjusted gross income.
///
/// Walks the brackets in ascending limit order, taxing each slice at its
/// bracket rate until the income is exhausted. The final bracket may be
/// unbounded (`upper_limit: None`) and absorbs everything remaining.
/// Non-positive income produces zero tax.
///
/// # Arguments
///
/// * `agi` - The adjusted gross income to tax
/// * `brackets` - Brackets in ascending limit order, unbounded last
///
/// # Examples
///
/// ```
/// use airs_engine::calculation::calculate_bracket_tax;
/// use airs_engine::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::default_schedule();
///
/// // 50,000 * 10% + 200,000 * 15% = 5,000 + 30,000
/// let tax = calculate_bracket_tax(Decimal::from(250000), config.brackets());
/// assert_eq!(tax, Decimal::from(27500));
/// ```
pub fn calculate_bracket_tax(agi: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut remaining_income = agi;
    let mut prev_limit = Decimal::ZERO;

    for bracket in brackets {
        if remaining_income <= Decimal::ZERO {
            break;
        }

        let slice = match bracket.upper_limit {
            Some(limit) => remaining_income.min(limit - prev_limit),
            None => remaining_income,
        };

        tax += slice * bracket.rate;
        remaining_income -= slice;
        if let Some(limit) = bracket.upper_limit {
            prev_limit = limit;
        }
    }

    tax
}
