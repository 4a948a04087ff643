//! Compute-credit currency formatting.
//!
//! Amounts are displayed in "CC" (compute credits) with thousands
//! separators and two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as a compute-credit string, e.g. `1,234.56 CC`.
///
/// Rounds to two decimal places, half away from zero. Negative amounts
/// keep their sign ahead of the grouped digits.
///
/// # Examples
///
/// ```
/// use airs_engine::filing::format_cc;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_cc(Decimal::new(123456789, 2)), "1,234,567.89 CC");
/// assert_eq!(format_cc(Decimal::ZERO), "0.00 CC");
/// ```
pub fn format_cc(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let unsigned = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{} CC", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_amount_has_no_separator() {
        assert_eq!(format_cc(dec("999.5")), "999.50 CC");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_cc(dec("1000")), "1,000.00 CC");
        assert_eq!(format_cc(dec("17885")), "17,885.00 CC");
        assert_eq!(format_cc(dec("1234567.89")), "1,234,567.89 CC");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_cc(Decimal::ZERO), "0.00 CC");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_cc(dec("2.005")), "2.01 CC");
        assert_eq!(format_cc(dec("11625.25")), "11,625.25 CC");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(format_cc(dec("-1234.5")), "-1,234.50 CC");
    }
}
