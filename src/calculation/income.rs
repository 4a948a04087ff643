//! Income aggregation functionality.
//!
//! This module collapses the individual income fields of a return into
//! the four source categories used by the rest of the assessment, plus
//! the gross total.

use rust_decimal::Decimal;

use crate::models::{IncomeBreakdown, IncomeSources};

/// Aggregates income sources into category totals and gross income.
///
/// Pure arithmetic with no validation: absent fields are already zero and
/// negative values flow through unchanged.
///
/// # Examples
///
/// ```
/// use airs_engine::calculation::aggregate_income;
/// use airs_engine::models::IncomeSources;
/// use rust_decimal::Decimal;
///
/// let sources = IncomeSources {
///     wage_income: Decimal::from(90000),
///     bonus_income: Decimal::from(10000),
///     ..Default::default()
/// };
///
/// let breakdown = aggregate_income(&sources);
/// assert_eq!(breakdown.employment_income, Decimal::from(100000));
/// assert_eq!(breakdown.gross_income, Decimal::from(100000));
/// ```
pub fn aggregate_income(sources: &IncomeSources) -> IncomeBreakdown {
    let employment_income = sources.wage_income + sources.bonus_income;
    let contract_income = sources.contract_income + sources.task_bounties;
    let a2a_income = sources.a2a_subcontract + sources.a2a_services;
    let other_income = sources.interest_income + sources.royalty_income;

    let gross_income: Decimal = employment_income + contract_income + a2a_income + other_income;

    IncomeBreakdown {
        employment_income,
        contract_income,
        a2a_income,
        other_income,
        gross_income,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_all_sources_aggregate_into_categories() {
        let sources = IncomeSources {
            wage_income: dec("50000"),
            bonus_income: dec("5000"),
            contract_income: dec("20000"),
            task_bounties: dec("2500"),
            a2a_subcontract: dec("1000"),
            a2a_services: dec("500"),
            interest_income: dec("300"),
            royalty_income: dec("700"),
        };

        let breakdown = aggregate_income(&sources);
        assert_eq!(breakdown.employment_income, dec("55000"));
        assert_eq!(breakdown.contract_income, dec("22500"));
        assert_eq!(breakdown.a2a_income, dec("1500"));
        assert_eq!(breakdown.other_income, dec("1000"));
        assert_eq!(breakdown.gross_income, dec("80000"));
    }

    #[test]
    fn test_empty_sources_yield_zero_gross() {
        let breakdown = aggregate_income(&IncomeSources::default());
        assert_eq!(breakdown.gross_income, Decimal::ZERO);
        assert_eq!(breakdown.employment_income, Decimal::ZERO);
    }

    #[test]
    fn test_negative_income_propagates() {
        let sources = IncomeSources {
            wage_income: dec("1000"),
            interest_income: dec("-250"),
            ..Default::default()
        };

        let breakdown = aggregate_income(&sources);
        assert_eq!(breakdown.other_income, dec("-250"));
        assert_eq!(breakdown.gross_income, dec("750"));
    }

    #[test]
    fn test_fractional_amounts_are_exact() {
        let sources = IncomeSources {
            a2a_subcontract: dec("0.10"),
            a2a_services: dec("0.20"),
            ..Default::default()
        };

        let breakdown = aggregate_income(&sources);
        assert_eq!(breakdown.a2a_income, dec("0.30"));
    }
}
