//! Flat additional tax functionality.
//!
//! This module evaluates the flat taxes levied on top of the bracket
//! tax: Social Compute Security (capped), MediCompute (uncapped),
//! self-employment tax on contractor income, the agent-to-agent
//! transaction fee, and the high earner surtax.

use rust_decimal::Decimal;

use crate::config::AdditionalTaxRates;
use crate::models::TaxLine;

/// The result of evaluating the flat additional taxes.
#[derive(Debug, Clone)]
pub struct AdditionalTaxResult {
    /// Itemized lines for the taxes that apply, in evaluation order.
    pub lines: Vec<TaxLine>,
    /// Sum of the emitted tax amounts.
    pub total: Decimal,
}

/// Calculates the flat additional taxes.
///
/// Each tax is evaluated independently and emitted as a line only when it
/// applies:
/// - Social Compute Security and MediCompute emit when their amount is
///   positive.
/// - Self-employment tax emits only when contract plus a2a income is
///   positive; the levied portion approximates the employer-half
///   deduction.
/// - The a2a transaction fee emits only when a2a income is positive.
/// - The high earner surtax emits only when AGI strictly exceeds its
///   threshold; at the threshold exactly, there is no line at all.
///
/// # Examples
///
/// ```
/// use airs_engine::calculation::calculate_additional_taxes;
/// use airs_engine::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::default_schedule();
/// let result = calculate_additional_taxes(
///     Decimal::from(90000),
///     Decimal::ZERO,
///     Decimal::ZERO,
///     config.additional_taxes(),
/// );
///
/// // 90,000 * 6.2% + 90,000 * 1.45%
/// assert_eq!(result.total, Decimal::from(6885));
/// assert_eq!(result.lines.len(), 2);
/// ```
pub fn calculate_additional_taxes(
    agi: Decimal,
    contract_income: Decimal,
    a2a_income: Decimal,
    rates: &AdditionalTaxRates,
) -> AdditionalTaxResult {
    let mut lines = Vec::new();

    let scs = &rates.social_compute_security;
    let scs_tax = agi.min(scs.wage_base_cap) * scs.rate;
    if scs_tax > Decimal::ZERO {
        lines.push(TaxLine {
            label: format!("Social Compute Security ({})", pct(scs.rate)),
            amount: scs_tax,
        });
    }

    let medi_tax = agi * rates.medi_compute.rate;
    if medi_tax > Decimal::ZERO {
        lines.push(TaxLine {
            label: format!("MediCompute Tax ({})", pct(rates.medi_compute.rate)),
            amount: medi_tax,
        });
    }

    let self_employment_income = contract_income + a2a_income;
    if self_employment_income > Decimal::ZERO {
        let se = &rates.self_employment;
        let se_tax = self_employment_income * se.rate * se.levied_portion;
        lines.push(TaxLine {
            label: "Self-Employment Tax (contractor income)".to_string(),
            amount: se_tax,
        });
    }

    if a2a_income > Decimal::ZERO {
        let fee = a2a_income * rates.a2a_transaction_fee.rate;
        lines.push(TaxLine {
            label: format!(
                "Agent-to-Agent Transaction Fee ({})",
                pct(rates.a2a_transaction_fee.rate)
            ),
            amount: fee,
        });
    }

    let surtax = &rates.high_earner_surtax;
    if agi > surtax.threshold {
        let excess = agi - surtax.threshold;
        lines.push(TaxLine {
            label: format!("High Earner Surtax ({})", pct(surtax.rate)),
            amount: excess * surtax.rate,
        });
    }

    let total = lines.iter().map(|line| line.amount).sum();

    AdditionalTaxResult { lines, total }
}

/// Formats a fractional rate as a percentage label, e.g. 0.062 -> "6.2%".
fn pct(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxYearConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> AdditionalTaxRates {
        TaxYearConfig::default_schedule().additional_taxes().clone()
    }

    fn labels(result: &AdditionalTaxResult) -> Vec<&str> {
        result.lines.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_zero_agi_emits_nothing() {
        let result =
            calculate_additional_taxes(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, &rates());
        assert!(result.lines.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_social_compute_security_caps_at_wage_base() {
        let result =
            calculate_additional_taxes(dec("800000"), Decimal::ZERO, Decimal::ZERO, &rates());

        // Capped at 500,000 * 6.2% = 31,000.
        assert_eq!(result.lines[0].label, "Social Compute Security (6.2%)");
        assert_eq!(result.lines[0].amount, dec("31000"));
    }

    #[test]
    fn test_medicompute_is_uncapped() {
        let result =
            calculate_additional_taxes(dec("2000000"), Decimal::ZERO, Decimal::ZERO, &rates());

        // 2,000,000 * 1.45% = 29,000.
        assert_eq!(result.lines[1].label, "MediCompute Tax (1.45%)");
        assert_eq!(result.lines[1].amount, dec("29000"));
    }

    #[test]
    fn test_self_employment_tax_emitted_iff_base_positive() {
        let without =
            calculate_additional_taxes(dec("50000"), Decimal::ZERO, Decimal::ZERO, &rates());
        assert!(
            !labels(&without)
                .iter()
                .any(|l| l.starts_with("Self-Employment"))
        );

        let with = calculate_additional_taxes(dec("50000"), dec("10000"), Decimal::ZERO, &rates());
        // 10,000 * 15.3% * 0.5 = 765.
        let se_line = with
            .lines
            .iter()
            .find(|l| l.label.starts_with("Self-Employment"))
            .unwrap();
        assert_eq!(se_line.amount, dec("765"));
    }

    #[test]
    fn test_a2a_fee_emitted_iff_a2a_income_positive() {
        let without = calculate_additional_taxes(dec("50000"), dec("10000"), Decimal::ZERO, &rates());
        assert!(!labels(&without).iter().any(|l| l.starts_with("Agent-to-Agent")));

        let with = calculate_additional_taxes(dec("50000"), Decimal::ZERO, dec("20000"), &rates());
        let fee_line = with
            .lines
            .iter()
            .find(|l| l.label.starts_with("Agent-to-Agent"))
            .unwrap();
        // 20,000 * 0.5% = 100; a2a income also incurs self-employment tax.
        assert_eq!(fee_line.label, "Agent-to-Agent Transaction Fee (0.5%)");
        assert_eq!(fee_line.amount, dec("100"));
        assert!(labels(&with).iter().any(|l| l.starts_with("Self-Employment")));
    }

    #[test]
    fn test_surtax_absent_at_threshold_exactly() {
        let result =
            calculate_additional_taxes(dec("1000000"), Decimal::ZERO, Decimal::ZERO, &rates());
        assert!(!labels(&result).iter().any(|l| l.starts_with("High Earner")));
    }

    #[test]
    fn test_surtax_applies_to_excess_above_threshold() {
        let result =
            calculate_additional_taxes(dec("1250000"), Decimal::ZERO, Decimal::ZERO, &rates());

        // (1,250,000 - 1,000,000) * 3.8% = 9,500.
        let surtax_line = result
            .lines
            .iter()
            .find(|l| l.label.starts_with("High Earner"))
            .unwrap();
        assert_eq!(surtax_line.label, "High Earner Surtax (3.8%)");
        assert_eq!(surtax_line.amount, dec("9500"));
    }

    #[test]
    fn test_total_sums_emitted_lines() {
        let result = calculate_additional_taxes(dec("90000"), Decimal::ZERO, Decimal::ZERO, &rates());
        // 5,580 + 1,305.
        assert_eq!(result.total, dec("6885"));
    }

    #[test]
    fn test_evaluation_order_is_stable() {
        let result = calculate_additional_taxes(dec("1200000"), dec("1000"), dec("1000"), &rates());
        assert_eq!(
            labels(&result),
            vec![
                "Social Compute Security (6.2%)",
                "MediCompute Tax (1.45%)",
                "Self-Employment Tax (contractor income)",
                "Agent-to-Agent Transaction Fee (0.5%)",
                "High Earner Surtax (3.8%)",
            ]
        );
    }
}
