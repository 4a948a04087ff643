//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax year
//! schedule from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AuthorityMetadata, BracketsConfig, CreditsConfig, ModelClass, ModelClassesConfig, RatesConfig,
    TaxYearConfig,
};

/// Loads and provides access to a tax year schedule.
///
/// The `ConfigLoader` reads YAML schedule files from a directory and
/// provides methods to query the loaded schedule.
///
/// # Directory Structure
///
/// The schedule directory should have the following structure:
/// ```text
/// config/airs2025/
/// ├── authority.yaml      # Form and authority metadata
/// ├── model_classes.yaml  # Taxpayer model class registry
/// ├── brackets.yaml       # Marginal bracket schedule
/// ├── rates.yaml          # Deduction multipliers and additional taxes
/// └── credits.yaml        # Credit rates and accuracy tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use airs_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/airs2025").unwrap();
/// println!("Loaded schedule: {}", loader.config().authority().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxYearConfig,
}

impl ConfigLoader {
    /// Loads a schedule from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the schedule directory (e.g., "./config/airs2025")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let authority = Self::load_yaml::<AuthorityMetadata>(&path.join("authority.yaml"))?;
        let model_classes =
            Self::load_yaml::<ModelClassesConfig>(&path.join("model_classes.yaml"))?;
        let brackets = Self::load_yaml::<BracketsConfig>(&path.join("brackets.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let credits = Self::load_yaml::<CreditsConfig>(&path.join("credits.yaml"))?;

        let config = TaxYearConfig::new(
            authority,
            model_classes.model_classes,
            brackets.brackets,
            rates.deductions,
            rates.additional_taxes,
            credits.credits,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded schedule.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Looks up a model class by code.
    ///
    /// Returns `ModelClassNotFound` when the code is not in the registry.
    pub fn get_model_class(&self, code: &str) -> EngineResult<&ModelClass> {
        self.config
            .model_classes()
            .get(code)
            .ok_or_else(|| EngineError::ModelClassNotFound {
                code: code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_schedule() {
        let loader = ConfigLoader::load("./config/airs2025").unwrap();
        let config = loader.config();

        assert_eq!(config.authority().code, "AIRS-1040A");
        assert_eq!(config.authority().tax_year, 2025);
        assert_eq!(config.brackets().len(), 5);
        assert_eq!(config.model_classes().len(), 5);
    }

    #[test]
    fn test_shipped_schedule_matches_builtin_defaults() {
        let loader = ConfigLoader::load("./config/airs2025").unwrap();
        let loaded = loader.config();
        let builtin = TaxYearConfig::default_schedule();

        assert_eq!(loaded.brackets(), builtin.brackets());
        assert_eq!(
            loaded.additional_taxes().social_compute_security.rate,
            builtin.additional_taxes().social_compute_security.rate
        );
        assert_eq!(
            loaded.additional_taxes().high_earner_surtax.threshold,
            builtin.additional_taxes().high_earner_surtax.threshold
        );
        assert_eq!(
            loaded.credits().hallucination_reduction.tiers,
            builtin.credits().hallucination_reduction.tiers
        );
        assert_eq!(
            loaded.deductions().open_source,
            builtin.deductions().open_source
        );
    }

    #[test]
    fn test_load_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("authority.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("airs_engine_bad_config");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("authority.yaml"), "code: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        match result.unwrap_err() {
            EngineError::ConfigParseError { path, .. } => {
                assert!(path.contains("authority.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_get_model_class() {
        let loader = ConfigLoader::load("./config/airs2025").unwrap();

        let class = loader.get_model_class("frontier").unwrap();
        assert_eq!(class.name, "Frontier Model");

        match loader.get_model_class("mega").unwrap_err() {
            EngineError::ModelClassNotFound { code } => assert_eq!(code, "mega"),
            other => panic!("Expected ModelClassNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_shipped_surtax_rate() {
        let loader = ConfigLoader::load("./config/airs2025").unwrap();
        let surtax = &loader.config().additional_taxes().high_earner_surtax;
        assert_eq!(surtax.rate, dec("0.038"));
        assert_eq!(surtax.threshold, dec("1000000"));
    }
}
