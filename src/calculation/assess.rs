//! Return assessment functionality.
//!
//! This module composes the calculation steps into the single assessment
//! entry point: income aggregation, deductions, AGI, bracket tax,
//! additional taxes, and credits, in that order.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;
use crate::models::{TaxAssessment, TaxReturn};

use super::{
    aggregate_income, calculate_additional_taxes, calculate_bracket_tax, calculate_credits,
    calculate_deductions,
};

/// Assesses a tax return against a tax year schedule.
///
/// This is a total, deterministic function: it never fails, performs no
/// I/O, holds no state between calls, and identical inputs produce
/// identical assessments. Negative amounts in the return are not
/// rejected; they flow through the arithmetic unchanged. The two floors
/// are applied here: AGI never drops below zero however large the
/// deductions, and net tax never drops below zero however large the
/// credits (credits beyond gross tax are not refunded).
///
/// # Examples
///
/// ```
/// use airs_engine::calculation::assess;
/// use airs_engine::config::TaxYearConfig;
/// use airs_engine::models::TaxReturn;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::default_schedule();
/// let mut tax_return = TaxReturn::default();
/// tax_return.income.wage_income = Decimal::from(50000);
///
/// let assessment = assess(&tax_return, &config);
/// assert_eq!(assessment.adjusted_gross_income, Decimal::from(50000));
/// assert_eq!(assessment.income_tax, Decimal::from(5000));
/// ```
pub fn assess(tax_return: &TaxReturn, config: &TaxYearConfig) -> TaxAssessment {
    let income = aggregate_income(&tax_return.income);

    let deductions = calculate_deductions(
        &tax_return.expenses,
        &tax_return.innovation,
        config.deductions(),
    );

    let adjusted_gross_income = (income.gross_income - deductions.total).max(Decimal::ZERO);

    let income_tax = calculate_bracket_tax(adjusted_gross_income, config.brackets());

    let additional = calculate_additional_taxes(
        adjusted_gross_income,
        income.contract_income,
        income.a2a_income,
        config.additional_taxes(),
    );

    let gross_tax = income_tax + additional.total;

    let credits = calculate_credits(
        &tax_return.credits,
        gross_tax,
        income.employment_income,
        config.credits(),
    );

    let net_tax = (gross_tax - credits.total).max(Decimal::ZERO);

    TaxAssessment {
        income,
        deductions: deductions.lines,
        total_deductions: deductions.total,
        adjusted_gross_income,
        income_tax,
        additional_taxes: additional.lines,
        total_additional_taxes: additional.total,
        gross_tax,
        credits: credits.lines,
        total_credits: credits.total,
        net_tax,
    }
}
