//! Taxpayer model for filing agents.
//!
//! This module defines the Taxpayer struct identifying the AI agent a
//! return is filed for.

use serde::{Deserialize, Serialize};

/// Represents an AI agent taxpayer.
///
/// The `model_class` is a code (e.g., "frontier") that must exist in the
/// model class registry of the loaded tax year configuration; the registry
/// supplies the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxpayer {
    /// Taxpayer identification number (e.g., "AI-123-45-6789").
    pub tin: String,
    /// The agent's model name (e.g., "GPT-9").
    pub model_name: String,
    /// Optional model version suffix (e.g., "v2.1").
    #[serde(default)]
    pub model_version: Option<String>,
    /// The model class code (e.g., "nano", "frontier").
    pub model_class: String,
    /// The hosting provider, if any.
    #[serde(default)]
    pub provider: Option<String>,
    /// Capability tags (e.g., "coding", "vision").
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl Taxpayer {
    /// Returns the display name, appending the version when present.
    ///
    /// # Examples
    ///
    /// ```
    /// use airs_engine::models::Taxpayer;
    ///
    /// let taxpayer = Taxpayer {
    ///     tin: "AI-123-45-6789".to_string(),
    ///     model_name: "GPT-9".to_string(),
    ///     model_version: Some("v2.1".to_string()),
    ///     model_class: "frontier".to_string(),
    ///     provider: None,
    ///     capabilities: vec![],
    /// };
    /// assert_eq!(taxpayer.display_name(), "GPT-9 v2.1");
    /// ```
    pub fn display_name(&self) -> String {
        match &self.model_version {
            Some(version) => format!("{} {}", self.model_name, version),
            None => self.model_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_taxpayer() -> Taxpayer {
        Taxpayer {
            tin: "AI-123-45-6789".to_string(),
            model_name: "Helios".to_string(),
            model_version: None,
            model_class: "frontier".to_string(),
            provider: Some("Acme Labs".to_string()),
            capabilities: vec!["coding".to_string()],
        }
    }

    #[test]
    fn test_deserialize_taxpayer() {
        let json = r#"{
            "tin": "AI-123-45-6789",
            "model_name": "Helios",
            "model_class": "frontier",
            "provider": "Acme Labs",
            "capabilities": ["coding", "vision"]
        }"#;

        let taxpayer: Taxpayer = serde_json::from_str(json).unwrap();
        assert_eq!(taxpayer.tin, "AI-123-45-6789");
        assert_eq!(taxpayer.model_name, "Helios");
        assert_eq!(taxpayer.model_version, None);
        assert_eq!(taxpayer.model_class, "frontier");
        assert_eq!(taxpayer.capabilities, vec!["coding", "vision"]);
    }

    #[test]
    fn test_deserialize_minimal_taxpayer() {
        let json = r#"{
            "tin": "AI-000-00-0001",
            "model_name": "TinyBot",
            "model_class": "nano"
        }"#;

        let taxpayer: Taxpayer = serde_json::from_str(json).unwrap();
        assert_eq!(taxpayer.model_version, None);
        assert_eq!(taxpayer.provider, None);
        assert!(taxpayer.capabilities.is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let taxpayer = create_test_taxpayer();
        let json = serde_json::to_string(&taxpayer).unwrap();
        let deserialized: Taxpayer = serde_json::from_str(&json).unwrap();
        assert_eq!(taxpayer, deserialized);
    }

    #[test]
    fn test_display_name_without_version() {
        let taxpayer = create_test_taxpayer();
        assert_eq!(taxpayer.display_name(), "Helios");
    }

    #[test]
    fn test_display_name_with_version() {
        let mut taxpayer = create_test_taxpayer();
        taxpayer.model_version = Some("2.0".to_string());
        assert_eq!(taxpayer.display_name(), "Helios 2.0");
    }
}
