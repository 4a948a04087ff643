//! Core data models for the AIRS tax engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assessment;
mod tax_return;
mod taxpayer;

pub use assessment::{
    CreditLine, DeductionLine, FilingRecord, IncomeBreakdown, TaxAssessment, TaxLine,
};
pub use tax_return::{BusinessExpenses, CreditClaims, CreditFlag, IncomeSources, InnovationSpend, TaxReturn};
pub use taxpayer::Taxpayer;
