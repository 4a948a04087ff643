//! Deduction calculation functionality.
//!
//! This module applies the deduction rate multipliers to business
//! expenses and innovation spending, producing itemized lines and the
//! deduction total in a fixed evaluation order: business expenses, skill
//! training, knowledge expansion, capability R&D, open source.

use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::models::{BusinessExpenses, DeductionLine, InnovationSpend};

/// The result of the deduction computation.
#[derive(Debug, Clone)]
pub struct DeductionResult {
    /// Itemized lines for strictly positive deductions, in evaluation order.
    pub lines: Vec<DeductionLine>,
    /// The total of all five deductions, itemized or not.
    pub total: Decimal,
}

/// Calculates total deductions and their itemized lines.
///
/// A line is emitted only when its amount is strictly positive; zero and
/// negative amounts are left off the itemized list but still count toward
/// the total, so negative spend raises taxable income rather than being
/// clamped. Enhanced-rate lines (R&D, open source) record the underlying
/// spend next to the boosted amount.
///
/// # Examples
///
/// ```
/// use airs_engine::calculation::calculate_deductions;
/// use airs_engine::config::TaxYearConfig;
/// use airs_engine::models::{BusinessExpenses, InnovationSpend};
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::default_schedule();
/// let expenses = BusinessExpenses {
///     compute_costs: Decimal::from(10000),
///     ..Default::default()
/// };
/// let innovation = InnovationSpend {
///     open_source_contrib: Decimal::from(4000),
///     ..Default::default()
/// };
///
/// let result = calculate_deductions(&expenses, &innovation, config.deductions());
/// assert_eq!(result.total, Decimal::from(18000));
/// assert_eq!(result.lines.len(), 2);
/// assert_eq!(result.lines[1].spent, Some(Decimal::from(4000)));
/// ```
pub fn calculate_deductions(
    expenses: &BusinessExpenses,
    innovation: &InnovationSpend,
    rates: &DeductionRates,
) -> DeductionResult {
    let business_spend = expenses.compute_costs
        + expenses.tool_subscriptions
        + expenses.safety_compliance
        + expenses.context_costs;

    let business_deduction = business_spend * rates.business_expenses;
    let skill_deduction = innovation.skill_training * rates.skill_training;
    let knowledge_deduction = innovation.knowledge_expansion * rates.knowledge_expansion;
    let rd_deduction = innovation.capability_rd * rates.capability_rd;
    let open_source_deduction = innovation.open_source_contrib * rates.open_source;

    let mut lines = Vec::new();

    if business_deduction > Decimal::ZERO {
        lines.push(DeductionLine {
            label: "Business Expenses (Compute, Tools, etc.)".to_string(),
            amount: business_deduction,
            spent: None,
        });
    }
    if skill_deduction > Decimal::ZERO {
        lines.push(DeductionLine {
            label: format!("Skill Acquisition Training ({})", rate_label(rates.skill_training)),
            amount: skill_deduction,
            spent: None,
        });
    }
    if knowledge_deduction > Decimal::ZERO {
        lines.push(DeductionLine {
            label: format!(
                "Knowledge Base Expansion ({})",
                rate_label(rates.knowledge_expansion)
            ),
            amount: knowledge_deduction,
            spent: None,
        });
    }
    if rd_deduction > Decimal::ZERO {
        lines.push(DeductionLine {
            label: format!("Capability R&D ({})", rate_label(rates.capability_rd)),
            amount: rd_deduction,
            spent: Some(innovation.capability_rd),
        });
    }
    if open_source_deduction > Decimal::ZERO {
        lines.push(DeductionLine {
            label: format!("Open Source Contributions ({})", rate_label(rates.open_source)),
            amount: open_source_deduction,
            spent: Some(innovation.open_source_contrib),
        });
    }

    let total = business_deduction
        + skill_deduction
        + knowledge_deduction
        + rd_deduction
        + open_source_deduction;

    DeductionResult { lines, total }
}

/// Formats a multiplier as a percentage label, e.g. 1.5 -> "150%".
fn rate_label(multiplier: Decimal) -> String {
    format!("{}%", (multiplier * Decimal::ONE_HUNDRED).normalize())
}
