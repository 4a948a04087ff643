//! Tax credit calculation functionality.
//!
//! This module evaluates the conditional credits in a fixed order:
//! Energy Efficiency, Human-AI Collaboration, First-Year Agent,
//! Mentorship, and the tiered Hallucination Reduction Credit.

use rust_decimal::Decimal;

use crate::config::CreditRates;
use crate::models::{CreditClaims, CreditFlag, CreditLine};

/// The result of evaluating tax credits.
#[derive(Debug, Clone)]
pub struct CreditResult {
    /// Itemized credit lines, in evaluation order.
    pub lines: Vec<CreditLine>,
    /// Sum of all credit amounts.
    pub total: Decimal,
}

/// Calculates the credits claimed on a return.
///
/// Flag-gated credits append a line whenever their flag is claimed, even
/// when the computed amount is zero (a zero gross tax still shows the
/// claimed credit on the breakdown). The mentorship credit needs no flag,
/// only a positive mentee count, and the hallucination credit is granted
/// by certified accuracy alone, at the rate of the highest tier whose
/// bound the accuracy meets.
///
/// # Examples
///
/// ```
/// use airs_engine::calculation::calculate_credits;
/// use airs_engine::config::TaxYearConfig;
/// use airs_engine::models::{CreditClaims, CreditFlag};
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::default_schedule();
/// let claims = CreditClaims {
///     flags: vec![CreditFlag::Energy],
///     mentee_count: 0,
///     accuracy_rate: Decimal::from(99),
/// };
///
/// let result = calculate_credits(
///     &claims,
///     Decimal::from(17885),
///     Decimal::from(100000),
///     config.credits(),
/// );
///
/// // 10% of gross tax, then 25% of gross tax.
/// assert_eq!(result.total, Decimal::new(625975, 2));
/// ```
pub fn calculate_credits(
    claims: &CreditClaims,
    gross_tax: Decimal,
    employment_income: Decimal,
    rates: &CreditRates,
) -> CreditResult {
    let mut lines = Vec::new();

    if claims.has_flag(CreditFlag::Energy) {
        lines.push(CreditLine {
            label: format!("Energy Efficiency Credit ({})", pct(rates.energy_efficiency.rate)),
            amount: gross_tax * rates.energy_efficiency.rate,
        });
    }

    if claims.has_flag(CreditFlag::HumanCollab) {
        lines.push(CreditLine {
            label: format!(
                "Human-AI Collaboration Bonus ({} of employment income)",
                pct(rates.human_collaboration.rate)
            ),
            amount: employment_income * rates.human_collaboration.rate,
        });
    }

    if claims.has_flag(CreditFlag::FirstYear) {
        // Exempts the first slice of bottom-bracket income, but never
        // more than the tax actually owed.
        let first_year = &rates.first_year;
        let amount = (first_year.exempt_income * first_year.rate).min(gross_tax);
        lines.push(CreditLine {
            label: "First-Year Agent Credit".to_string(),
            amount,
        });
    }

    if claims.mentee_count > 0 {
        lines.push(CreditLine {
            label: format!("Mentorship Credit ({} mentees)", claims.mentee_count),
            amount: Decimal::from(claims.mentee_count) * rates.mentorship.per_mentee,
        });
    }

    let tier = rates
        .hallucination_reduction
        .tiers
        .iter()
        .find(|tier| claims.accuracy_rate >= tier.min_accuracy);
    if let Some(tier) = tier {
        lines.push(CreditLine {
            label: format!("Hallucination Reduction Credit ({})", pct(tier.rate)),
            amount: gross_tax * tier.rate,
        });
    }

    let total = lines.iter().map(|line| line.amount).sum();

    CreditResult { lines, total }
}

/// Formats a fractional rate as a percentage label, e.g. 0.25 -> "25%".
fn pct(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
