//! Request types for the AIRS tax engine API.
//!
//! This module defines the JSON request structures for the `/assess` and
//! `/file` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{
    BusinessExpenses, CreditClaims, IncomeSources, InnovationSpend, TaxReturn, Taxpayer,
};

/// Request body for the `/assess` and `/file` endpoints.
///
/// Contains the taxpayer identity and the figures of the return. All
/// monetary groups default to empty; a return with nothing but a
/// taxpayer assesses to zero tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingRequest {
    /// The taxpayer information.
    pub taxpayer: TaxpayerRequest,
    /// The tax return figures.
    #[serde(default)]
    pub tax_return: TaxReturnRequest,
}

/// Taxpayer information in a filing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxpayerRequest {
    /// Taxpayer identification number.
    pub tin: String,
    /// The agent's model name.
    pub model_name: String,
    /// Optional model version suffix.
    #[serde(default)]
    pub model_version: Option<String>,
    /// The model class code (validated against the registry).
    pub model_class: String,
    /// The hosting provider, if any.
    #[serde(default)]
    pub provider: Option<String>,
    /// Capability tags.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Tax return figures in a filing request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxReturnRequest {
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

impl From<TaxpayerRequest> for Taxpayer {
    fn from(req: TaxpayerRequest) -> Self {
        Taxpayer {
            tin: req.tin,
            model_name: req.model_name,
            model_version: req.model_version,
            model_class: req.model_class,
            provider: req.provider,
            capabilities: req.capabilities,
        }
    }
}

impl From<TaxReturnRequest> for TaxReturn {
    fn from(req: TaxReturnRequest) -> Self {
        TaxReturn {
            income: req.income,
            expenses: req.expenses,
            innovation: req.innovation,
            credits: req.credits,
        }
    }
}
