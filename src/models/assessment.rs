//! Assessment result models.
//!
//! This module contains the [`TaxAssessment`] type and its associated
//! structures that capture all outputs of a tax calculation, and the
//! [`FilingRecord`] envelope produced when a return is filed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Taxpayer;

/// Income aggregated by source category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Wage plus bonus income.
    pub employment_income: Decimal,
    /// Contract income plus task bounties.
    pub contract_income: Decimal,
    /// Agent-to-agent subcontracting plus service income.
    pub a2a_income: Decimal,
    /// Interest plus royalty income.
    pub other_income: Decimal,
    /// Sum of the four aggregates above.
    pub gross_income: Decimal,
}

/// A single deduction line item.
///
/// Lines are only emitted for strictly positive amounts; amounts that are
/// zero or negative still contribute to the deduction total without
/// appearing in the itemized list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// Display label for the deduction.
    pub label: String,
    /// The deductible amount after the rate multiplier.
    pub amount: Decimal,
    /// The underlying spend, recorded when the rate exceeds 100%.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<Decimal>,
}

/// A single flat additional tax line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Display label for the tax.
    pub label: String,
    /// The tax amount.
    pub amount: Decimal,
}

/// A single tax credit line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLine {
    /// Display label for the credit.
    pub label: String,
    /// The credit amount.
    pub amount: Decimal,
}

/// The complete result of assessing a tax return.
///
/// Created fresh per assessment and never mutated afterwards. Line item
/// order matches evaluation order, so renderers can display the lists
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Income aggregated by source category.
    pub income: IncomeBreakdown,
    /// Itemized deductions, in evaluation order.
    pub deductions: Vec<DeductionLine>,
    /// Total of all deductions, including non-itemized ones.
    pub total_deductions: Decimal,
    /// Gross income minus deductions, floored at zero.
    pub adjusted_gross_income: Decimal,
    /// Progressive bracket tax on adjusted gross income.
    pub income_tax: Decimal,
    /// Itemized flat additional taxes, in evaluation order.
    pub additional_taxes: Vec<TaxLine>,
    /// Total of the emitted additional taxes.
    pub total_additional_taxes: Decimal,
    /// Income tax plus additional taxes.
    pub gross_tax: Decimal,
    /// Itemized credits, in evaluation order.
    pub credits: Vec<CreditLine>,
    /// Total of all credits.
    pub total_credits: Decimal,
    /// Gross tax minus credits, floored at zero.
    pub net_tax: Decimal,
}

impl TaxAssessment {
    /// Returns the effective tax rate as a 0-100 percentage.
    ///
    /// Returns `None` when gross income is not positive, so callers never
    /// divide by zero when deriving a rate for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use airs_engine::calculation::assess;
    /// use airs_engine::config::TaxYearConfig;
    /// use airs_engine::models::TaxReturn;
    ///
    /// let config = TaxYearConfig::default_schedule();
    /// let assessment = assess(&TaxReturn::default(), &config);
    /// assert_eq!(assessment.effective_rate(), None);
    /// ```
    pub fn effective_rate(&self) -> Option<Decimal> {
        if self.income.gross_income > Decimal::ZERO {
            Some(self.net_tax / self.income.gross_income * Decimal::ONE_HUNDRED)
        } else {
            None
        }
    }
}

/// The record produced when a return is filed.
///
/// Wraps the assessment with filing metadata: a unique filing ID, the
/// human-facing confirmation number, a timestamp, and the engine version,
/// so a receipt can be rendered and shared from this record alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRecord {
    /// Unique identifier for this filing.
    pub filing_id: Uuid,
    /// Human-facing confirmation number (e.g., "AI-2025-3F9A-B2C1").
    pub confirmation_number: String,
    /// When the return was filed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the assessment.
    pub engine_version: String,
    /// The tax year the return was filed for.
    pub tax_year: i32,
    /// The taxpayer the return was filed for.
    pub taxpayer: Taxpayer,
    /// The assessed tax breakdown.
    pub assessment: TaxAssessment,
}
