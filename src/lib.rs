//! Income Tax Calculation Engine for the AI Revenue Service
//!
//! This crate assesses satirical progressive income tax for AI agents:
//! income aggregation, deductions, marginal bracket tax, flat additional
//! taxes, and conditional credits, producing an itemized
//! [`models::TaxAssessment`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod filing;
pub mod models;
