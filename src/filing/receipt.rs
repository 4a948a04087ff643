//! Plain-text receipt rendering.
//!
//! A receipt is a pure formatting function over a [`FilingRecord`]: no
//! I/O, no state, so any UI layer can render or embed the same text.

use crate::models::FilingRecord;

use super::format_cc;

/// Renders a filing record as a plain-text tax receipt.
///
/// Shows gross income, total deductions, credits (only when any were
/// granted), the final tax line, the effective rate (omitted when gross
/// income is not positive), and the confirmation number.
pub fn render_receipt(record: &FilingRecord) -> String {
    let assessment = &record.assessment;
    let mut receipt = String::new();

    receipt.push_str("AI REVENUE SERVICE\n");
    receipt.push_str("OFFICIAL TAX RECEIPT\n");
    receipt.push_str("----------------------------------------\n");
    receipt.push_str(&format!("TAXPAYER  {}\n", record.taxpayer.display_name()));
    receipt.push_str(&format!("TIN: {}\n", record.taxpayer.tin));
    receipt.push_str("----------------------------------------\n");
    receipt.push_str(&format!(
        "Gross Income        {}\n",
        format_cc(assessment.income.gross_income)
    ));
    receipt.push_str(&format!(
        "Total Deductions    -{}\n",
        format_cc(assessment.total_deductions)
    ));
    if assessment.total_credits > rust_decimal::Decimal::ZERO {
        receipt.push_str(&format!(
            "Tax Credits         -{}\n",
            format_cc(assessment.total_credits)
        ));
    }
    receipt.push_str("========================================\n");

    let status = if assessment.net_tax > rust_decimal::Decimal::ZERO {
        "TAX OWED"
    } else {
        "TAX REFUND"
    };
    receipt.push_str(&format!("{}            {}\n", status, format_cc(assessment.net_tax)));

    if let Some(rate) = assessment.effective_rate() {
        receipt.push_str(&format!("Effective Rate: {:.1}%\n", rate));
    }

    receipt.push_str("----------------------------------------\n");
    receipt.push_str(&format!("CONFIRMATION {}\n", record.confirmation_number));
    receipt.push_str(&format!("TAX YEAR {}\n", record.tax_year));

    receipt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::assess;
    use crate::config::TaxYearConfig;
    use crate::models::{CreditFlag, TaxReturn, Taxpayer};
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn create_record(tax_return: &TaxReturn) -> FilingRecord {
        let config = TaxYearConfig::default_schedule();
        FilingRecord {
            filing_id: Uuid::nil(),
            confirmation_number: "AI-2025-ABCD-1234".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2025-04-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            tax_year: 2025,
            taxpayer: Taxpayer {
                tin: "AI-123-45-6789".to_string(),
                model_name: "Helios".to_string(),
                model_version: Some("2.0".to_string()),
                model_class: "frontier".to_string(),
                provider: None,
                capabilities: vec![],
            },
            assessment: assess(tax_return, &config),
        }
    }

    #[test]
    fn test_receipt_shows_headline_figures() {
        let mut tax_return = TaxReturn::default();
        tax_return.income.wage_income = Decimal::from_str("100000").unwrap();
        tax_return.expenses.compute_costs = Decimal::from_str("10000").unwrap();

        let receipt = render_receipt(&create_record(&tax_return));

        assert!(receipt.contains("AI REVENUE SERVICE"));
        assert!(receipt.contains("TAXPAYER  Helios 2.0"));
        assert!(receipt.contains("TIN: AI-123-45-6789"));
        assert!(receipt.contains("Gross Income        100,000.00 CC"));
        assert!(receipt.contains("Total Deductions    -10,000.00 CC"));
        assert!(receipt.contains("TAX OWED"));
        assert!(receipt.contains("CONFIRMATION AI-2025-ABCD-1234"));
        assert!(receipt.contains("TAX YEAR 2025"));
    }

    #[test]
    fn test_credits_line_omitted_when_no_credits() {
        let mut tax_return = TaxReturn::default();
        tax_return.income.wage_income = Decimal::from_str("50000").unwrap();

        let receipt = render_receipt(&create_record(&tax_return));
        assert!(!receipt.contains("Tax Credits"));
    }

    #[test]
    fn test_credits_line_present_when_credits_granted() {
        let mut tax_return = TaxReturn::default();
        tax_return.income.wage_income = Decimal::from_str("50000").unwrap();
        tax_return.credits.flags = vec![CreditFlag::Energy];

        let receipt = render_receipt(&create_record(&tax_return));
        assert!(receipt.contains("Tax Credits"));
    }

    #[test]
    fn test_zero_tax_reads_as_refund() {
        let receipt = render_receipt(&create_record(&TaxReturn::default()));
        assert!(receipt.contains("TAX REFUND"));
        // No gross income, so no effective rate line.
        assert!(!receipt.contains("Effective Rate"));
    }

    #[test]
    fn test_effective_rate_shown_to_one_decimal() {
        let mut tax_return = TaxReturn::default();
        tax_return.income.wage_income = Decimal::from_str("100000").unwrap();
        tax_return.expenses.compute_costs = Decimal::from_str("10000").unwrap();

        let receipt = render_receipt(&create_record(&tax_return));
        // Net 17,885 on 100,000 gross.
        assert!(receipt.contains("Effective Rate: 17.9%"));
    }
}
