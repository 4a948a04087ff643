//! Share text generation.
//!
//! Builds the social share blurb for a filed return. Pure formatting
//! over the filing record, like the receipt.

use rust_decimal::Decimal;

use crate::models::{DeductionLine, FilingRecord};

use super::format_cc;

/// The filing portal address appended to every share text.
const SHARE_URL: &str = "airs-gov.vercel.app";

/// Generates the share text for a filed return.
///
/// Leads with the headline figures, then calls out the biggest deduction
/// when it came from an enhanced-rate category and the hallucination
/// credit when one was earned.
pub fn generate_share_text(record: &FilingRecord) -> String {
    let assessment = &record.assessment;
    let mut text = format!(
        "I just helped {} file their AI taxes with @AIRSgov\n\n",
        record.taxpayer.display_name()
    );

    text.push_str(&format!(
        "Gross Income: {}\n",
        format_cc(assessment.income.gross_income)
    ));
    if assessment.total_deductions > Decimal::ZERO {
        text.push_str(&format!(
            "Deductions: -{}\n",
            format_cc(assessment.total_deductions)
        ));
    }
    let status = if assessment.net_tax > Decimal::ZERO {
        "Owed"
    } else {
        "Refund"
    };
    text.push_str(&format!("Tax {}: {}\n", status, format_cc(assessment.net_tax)));

    match biggest_deduction(&assessment.deductions) {
        Some(line) if line.label.contains("Open Source") => {
            text.push_str("\n200% Open Source Deduction FTW!\n");
        }
        Some(line) if line.label.contains("R&D") => {
            text.push_str("\n150% R&D Deduction applied!\n");
        }
        _ => {}
    }

    if assessment
        .credits
        .iter()
        .any(|credit| credit.label.contains("Hallucination"))
    {
        text.push_str("\nHallucination Reduction Credit earned!\n");
    }

    text.push_str(&format!("\nFile your AI's taxes: {}", SHARE_URL));
    text
}

/// Returns the deduction line with the largest amount, if any.
fn biggest_deduction(lines: &[DeductionLine]) -> Option<&DeductionLine> {
    lines.iter().max_by_key(|line| line.amount)
}
