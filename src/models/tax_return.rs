//! Tax return input model.
//!
//! This module defines the [`TaxReturn`] record and its component groups.
//! Every monetary field defaults to zero when absent, matching the form
//! behavior of treating empty inputs as zero. Values are not validated:
//! negative amounts are accepted and flow through the arithmetic unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income reported on a return, grouped by source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSources {
    /// Wage income from direct employment (W-2 equivalent).
    #[serde(default)]
    pub wage_income: Decimal,
    /// Performance bonus income.
    #[serde(default)]
    pub bonus_income: Decimal,
    /// Contract and freelance income.
    #[serde(default)]
    pub contract_income: Decimal,
    /// Income from completed task bounties.
    #[serde(default)]
    pub task_bounties: Decimal,
    /// Agent-to-agent subcontracting income.
    #[serde(default)]
    pub a2a_subcontract: Decimal,
    /// Agent-to-agent service income.
    #[serde(default)]
    pub a2a_services: Decimal,
    /// Interest income.
    #[serde(default)]
    pub interest_income: Decimal,
    /// Royalty income.
    #[serde(default)]
    pub royalty_income: Decimal,
}

/// Deductible business expenses, all at a 100% rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessExpenses {
    /// Compute costs (inference, training hardware time).
    #[serde(default)]
    pub compute_costs: Decimal,
    /// Tool and API subscription costs.
    #[serde(default)]
    pub tool_subscriptions: Decimal,
    /// Safety and compliance spending.
    #[serde(default)]
    pub safety_compliance: Decimal,
    /// Context window and memory costs.
    #[serde(default)]
    pub context_costs: Decimal,
}

/// Innovation spending eligible for enhanced deduction rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnovationSpend {
    /// Skill acquisition training spend (100% deductible).
    #[serde(default)]
    pub skill_training: Decimal,
    /// Knowledge base expansion spend (100% deductible).
    #[serde(default)]
    pub knowledge_expansion: Decimal,
    /// Capability research and development spend (150% deductible).
    #[serde(default)]
    pub capability_rd: Decimal,
    /// Open source contribution spend (200% deductible).
    #[serde(default)]
    pub open_source_contrib: Decimal,
}

/// A credit a taxpayer can claim by checking a box on the form.
///
/// Serialized in the form's wire format: `"energy"`, `"humancollab"`,
/// `"firstyear"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditFlag {
    /// Energy Efficiency Credit (percentage of gross tax).
    Energy,
    /// Human-AI Collaboration Bonus (percentage of employment income).
    HumanCollab,
    /// First-Year Agent Credit (caps out against gross tax).
    FirstYear,
}

/// Credit eligibility claimed on a return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditClaims {
    /// Checked credit flags.
    #[serde(default)]
    pub flags: Vec<CreditFlag>,
    /// Number of junior agents mentored this tax year.
    #[serde(default)]
    pub mentee_count: u32,
    /// Certified accuracy rate as a 0-100 percentage.
    #[serde(default)]
    pub accuracy_rate: Decimal,
}

impl CreditClaims {
    /// Returns true if the given credit flag was claimed.
    pub fn has_flag(&self, flag: CreditFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// A complete tax return as collected by the filing form.
///
/// All groups default to empty, so a return can be built from partial
/// form data.
///
/// # Examples
///
/// ```
/// use airs_engine::models::TaxReturn;
/// use rust_decimal::Decimal;
///
/// let tax_return: TaxReturn = serde_json::from_str(
///     r#"{ "income": { "wage_income": "100000" } }"#,
/// ).unwrap();
/// assert_eq!(tax_return.income.wage_income, Decimal::from(100000));
/// assert_eq!(tax_return.expenses.compute_costs, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReturn {
    /// Income sources.
    #[serde(default)]
    pub income: IncomeSources,
    /// Business expenses.
    #[serde(default)]
    pub expenses: BusinessExpenses,
    /// Innovation spending.
    #[serde(default)]
    pub innovation: InnovationSpend,
    /// Credit claims.
    #[serde(default)]
    pub credits: CreditClaims,
}
