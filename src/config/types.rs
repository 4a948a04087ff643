//! Configuration types for the tax schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML schedule files for a tax year.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the taxing authority and form.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorityMetadata {
    /// The form code (e.g., "AIRS-1040A").
    pub code: String,
    /// The human-readable name of the form.
    pub name: String,
    /// The tax year this schedule applies to.
    pub tax_year: i32,
    /// URL of the filing portal.
    pub source_url: String,
}

/// A model class in the taxpayer classification registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelClass {
    /// The human-readable name of the class (e.g., "Frontier Model").
    pub name: String,
    /// A description of the class.
    pub description: String,
}

/// Model class registry file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelClassesConfig {
    /// Map of model class code to class details.
    pub model_classes: HashMap<String, ModelClass>,
}

/// One marginal tax bracket.
///
/// A bracket taxes only the slice of income between the previous
/// bracket's upper limit and its own. The top bracket has no upper limit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The cumulative upper income limit, or `None` for the top bracket.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// The marginal rate applied within this bracket.
    pub rate: Decimal,
}

/// Bracket schedule file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketsConfig {
    /// Brackets in ascending limit order.
    pub brackets: Vec<TaxBracket>,
}

/// Deduction rate multipliers by spend category.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionRates {
    /// Multiplier for business expenses.
    pub business_expenses: Decimal,
    /// Multiplier for skill acquisition training.
    pub skill_training: Decimal,
    /// Multiplier for knowledge base expansion.
    pub knowledge_expansion: Decimal,
    /// Multiplier for capability R&D (enhanced).
    pub capability_rd: Decimal,
    /// Multiplier for open source contributions (enhanced).
    pub open_source: Decimal,
}

/// A flat tax applied up to a wage base cap.
#[derive(Debug, Clone, Deserialize)]
pub struct CappedTaxRate {
    /// The tax rate.
    pub rate: Decimal,
    /// Income above this cap is not taxed.
    pub wage_base_cap: Decimal,
}

/// A flat, uncapped tax rate.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatTaxRate {
    /// The tax rate.
    pub rate: Decimal,
}

/// Self-employment tax parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SelfEmploymentRate {
    /// The nominal self-employment tax rate.
    pub rate: Decimal,
    /// Fraction of the nominal tax actually levied, approximating the
    /// employer-portion deduction.
    pub levied_portion: Decimal,
}

/// A surtax levied only on income above a threshold.
#[derive(Debug, Clone, Deserialize)]
pub struct SurtaxRate {
    /// The surtax rate on the excess.
    pub rate: Decimal,
    /// Income must strictly exceed this threshold for the surtax to apply.
    pub threshold: Decimal,
}

/// All flat additional taxes for a tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionalTaxRates {
    /// Social Compute Security tax (capped).
    pub social_compute_security: CappedTaxRate,
    /// MediCompute tax (uncapped).
    pub medi_compute: FlatTaxRate,
    /// Self-employment tax on contractor income.
    pub self_employment: SelfEmploymentRate,
    /// Agent-to-agent transaction fee.
    pub a2a_transaction_fee: FlatTaxRate,
    /// High earner surtax.
    pub high_earner_surtax: SurtaxRate,
}

/// Rates file structure (deductions plus additional taxes).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Deduction multipliers.
    pub deductions: DeductionRates,
    /// Additional tax rates.
    pub additional_taxes: AdditionalTaxRates,
}

/// First-Year Agent Credit parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct FirstYearCredit {
    /// The income amount exempted from the bottom bracket.
    pub exempt_income: Decimal,
    /// The bottom bracket rate the exemption is valued at.
    pub rate: Decimal,
}

/// Mentorship Credit parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct MentorshipCredit {
    /// Flat credit per mentee.
    pub per_mentee: Decimal,
}

/// One accuracy tier of the Hallucination Reduction Credit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccuracyTier {
    /// Inclusive lower bound on the certified accuracy percentage.
    pub min_accuracy: Decimal,
    /// Credit rate applied to gross tax for this tier.
    pub rate: Decimal,
}

/// Hallucination Reduction Credit parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct HallucinationCredit {
    /// Accuracy tiers; matched highest bound first.
    pub tiers: Vec<AccuracyTier>,
}

/// All credit rates for a tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRates {
    /// Energy Efficiency Credit rate on gross tax.
    pub energy_efficiency: FlatTaxRate,
    /// Human-AI Collaboration Bonus rate on employment income.
    pub human_collaboration: FlatTaxRate,
    /// First-Year Agent Credit parameters.
    pub first_year: FirstYearCredit,
    /// Mentorship Credit parameters.
    pub mentorship: MentorshipCredit,
    /// Hallucination Reduction Credit tiers.
    pub hallucination_reduction: HallucinationCredit,
}

/// Credits file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsConfig {
    /// Credit rates.
    pub credits: CreditRates,
}

/// The complete tax schedule for one tax year.
///
/// Aggregates everything loaded from the YAML files in a schedule
/// directory. Construction normalizes ordering: brackets ascend by limit
/// (unbounded last) and accuracy tiers descend by bound, so the
/// calculation modules can rely on iteration order.
#[derive(Debug, Clone)]
pub struct TaxYearConfig {
    /// Authority metadata.
    authority: AuthorityMetadata,
    /// Model classes a taxpayer may file under.
    model_classes: HashMap<String, ModelClass>,
    /// Marginal brackets, ascending by limit.
    brackets: Vec<TaxBracket>,
    /// Deduction multipliers.
    deductions: DeductionRates,
    /// Additional tax rates.
    additional_taxes: AdditionalTaxRates,
    /// Credit rates.
    credits: CreditRates,
}

impl TaxYearConfig {
    /// Creates a new TaxYearConfig from its component parts.
    pub fn new(
        authority: AuthorityMetadata,
        model_classes: HashMap<String, ModelClass>,
        brackets: Vec<TaxBracket>,
        deductions: DeductionRates,
        additional_taxes: AdditionalTaxRates,
        credits: CreditRates,
    ) -> Self {
        let mut sorted_brackets = brackets;
        sorted_brackets.sort_by(|a, b| match (a.upper_limit, b.upper_limit) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let mut credits = credits;
        credits
            .hallucination_reduction
            .tiers
            .sort_by(|a, b| b.min_accuracy.cmp(&a.min_accuracy));

        Self {
            authority,
            model_classes,
            brackets: sorted_brackets,
            deductions,
            additional_taxes,
            credits,
        }
    }

    /// Returns the built-in 2025 schedule.
    ///
    /// This is the schedule shipped in `config/airs2025/`, expressed in
    /// code so the calculation layer can be used without touching the
    /// filesystem.
    pub fn default_schedule() -> Self {
        let authority = AuthorityMetadata {
            code: "AIRS-1040A".to_string(),
            name: "AI Revenue Service Individual Agent Return".to_string(),
            tax_year: 2025,
            source_url: "https://airs-gov.vercel.app".to_string(),
        };

        let mut model_classes = HashMap::new();
        for (code, name, description) in [
            ("nano", "Nano Model", "Sub-billion parameter agents"),
            ("small", "Small Model", "Single-node agents"),
            ("medium", "Medium Model", "General purpose agents"),
            ("large", "Large Model", "Multi-node agents"),
            ("frontier", "Frontier Model", "State of the art agents"),
        ] {
            model_classes.insert(
                code.to_string(),
                ModelClass {
                    name: name.to_string(),
                    description: description.to_string(),
                },
            );
        }

        let brackets = vec![
            TaxBracket {
                upper_limit: Some(Decimal::new(50_000, 0)),
                rate: Decimal::new(10, 2),
            },
            TaxBracket {
                upper_limit: Some(Decimal::new(200_000, 0)),
                rate: Decimal::new(15, 2),
            },
            TaxBracket {
                upper_limit: Some(Decimal::new(500_000, 0)),
                rate: Decimal::new(22, 2),
            },
            TaxBracket {
                upper_limit: Some(Decimal::new(1_000_000, 0)),
                rate: Decimal::new(28, 2),
            },
            TaxBracket {
                upper_limit: None,
                rate: Decimal::new(35, 2),
            },
        ];

        let deductions = DeductionRates {
            business_expenses: Decimal::new(100, 2),
            skill_training: Decimal::new(100, 2),
            knowledge_expansion: Decimal::new(100, 2),
            capability_rd: Decimal::new(150, 2),
            open_source: Decimal::new(200, 2),
        };

        let additional_taxes = AdditionalTaxRates {
            social_compute_security: CappedTaxRate {
                rate: Decimal::new(62, 3),
                wage_base_cap: Decimal::new(500_000, 0),
            },
            medi_compute: FlatTaxRate {
                rate: Decimal::new(145, 4),
            },
            self_employment: SelfEmploymentRate {
                rate: Decimal::new(153, 3),
                levied_portion: Decimal::new(5, 1),
            },
            a2a_transaction_fee: FlatTaxRate {
                rate: Decimal::new(5, 3),
            },
            high_earner_surtax: SurtaxRate {
                rate: Decimal::new(38, 3),
                threshold: Decimal::new(1_000_000, 0),
            },
        };

        let credits = CreditRates {
            energy_efficiency: FlatTaxRate {
                rate: Decimal::new(10, 2),
            },
            human_collaboration: FlatTaxRate {
                rate: Decimal::new(5, 2),
            },
            first_year: FirstYearCredit {
                exempt_income: Decimal::new(25_000, 0),
                rate: Decimal::new(10, 2),
            },
            mentorship: MentorshipCredit {
                per_mentee: Decimal::new(3_000, 0),
            },
            hallucination_reduction: HallucinationCredit {
                tiers: vec![
                    AccuracyTier {
                        min_accuracy: Decimal::new(99, 0),
                        rate: Decimal::new(25, 2),
                    },
                    AccuracyTier {
                        min_accuracy: Decimal::new(98, 0),
                        rate: Decimal::new(20, 2),
                    },
                    AccuracyTier {
                        min_accuracy: Decimal::new(96, 0),
                        rate: Decimal::new(15, 2),
                    },
                    AccuracyTier {
                        min_accuracy: Decimal::new(95, 0),
                        rate: Decimal::new(10, 2),
                    },
                ],
            },
        };

        Self::new(
            authority,
            model_classes,
            brackets,
            deductions,
            additional_taxes,
            credits,
        )
    }

    /// Returns the authority metadata.
    pub fn authority(&self) -> &AuthorityMetadata {
        &self.authority
    }

    /// Returns the model class registry.
    pub fn model_classes(&self) -> &HashMap<String, ModelClass> {
        &self.model_classes
    }

    /// Returns the marginal brackets in ascending limit order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the deduction multipliers.
    pub fn deductions(&self) -> &DeductionRates {
        &self.deductions
    }

    /// Returns the additional tax rates.
    pub fn additional_taxes(&self) -> &AdditionalTaxRates {
        &self.additional_taxes
    }

    /// Returns the credit rates.
    pub fn credits(&self) -> &CreditRates {
        &self.credits
    }
}
