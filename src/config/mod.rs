//! Tax schedule loading and management.
//!
//! This module provides functionality to load a tax year schedule from
//! YAML files: authority metadata, the model class registry, the marginal
//! bracket schedule, deduction and additional-tax rates, and credit rates.
//!
//! # Example
//!
//! ```no_run
//! use airs_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/airs2025").unwrap();
//! println!("Tax year: {}", loader.config().authority().tax_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccuracyTier, AdditionalTaxRates, AuthorityMetadata, BracketsConfig, CappedTaxRate,
    CreditRates, CreditsConfig, DeductionRates, FirstYearCredit, FlatTaxRate, HallucinationCredit,
    MentorshipCredit, ModelClass, ModelClassesConfig, RatesConfig, SelfEmploymentRate, SurtaxRate,
    TaxBracket, TaxYearConfig,
};
