//! Deployment configuration for the console.
//!
//! The client runs in the browser, so the deployment flavor is baked in at
//! build time through `CONSOLE_*` environment variables. A JSON document can
//! be used instead when the host page injects its own settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

pub const DEFAULT_DOCS_URL: &str = "https://docs.agenta.ai";
pub const DEFAULT_EXPERT_URL: &str = "https://cal.com/mahmoud-mabrouk-ogzgey/demo";

/// Deployment flavor of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeatureFlag {
    #[default]
    Oss,
    Cloud,
    #[serde(rename = "ee")]
    Enterprise,
}

impl FeatureFlag {
    /// Hosted flavors expose organizations and expert contact.
    pub fn is_demo(&self) -> bool {
        matches!(self, FeatureFlag::Cloud | FeatureFlag::Enterprise)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureFlag::Oss => "oss",
            FeatureFlag::Cloud => "cloud",
            FeatureFlag::Enterprise => "ee",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureFlag {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oss" | "" => Ok(FeatureFlag::Oss),
            "cloud" => Ok(FeatureFlag::Cloud),
            "ee" => Ok(FeatureFlag::Enterprise),
            other => Err(NavError::InvalidConfig {
                message: format!("unknown feature flag '{}'", other),
            }),
        }
    }
}

/// Settings the sidebar needs from the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub feature_flag: FeatureFlag,
    pub docs_url: String,
    pub expert_url: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            feature_flag: FeatureFlag::default(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            expert_url: DEFAULT_EXPERT_URL.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Read the configuration baked in at compile time.
    ///
    /// An unrecognized `CONSOLE_FEATURE_FLAG` falls back to [`FeatureFlag::Oss`].
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CONSOLE_FEATURE_FLAG"),
            option_env!("CONSOLE_DOCS_URL"),
            option_env!("CONSOLE_EXPERT_URL"),
        )
    }

    fn from_values(flag: Option<&str>, docs_url: Option<&str>, expert_url: Option<&str>) -> Self {
        let defaults = Self::default();

        let feature_flag = match flag.map(str::parse::<FeatureFlag>) {
            Some(Ok(flag)) => flag,
            Some(Err(err)) => {
                log::warn!("{}, falling back to '{}'", err, FeatureFlag::Oss);
                FeatureFlag::Oss
            }
            None => defaults.feature_flag,
        };

        Self {
            feature_flag,
            docs_url: docs_url.map(str::to_string).unwrap_or(defaults.docs_url),
            expert_url: expert_url.map(str::to_string).unwrap_or(defaults.expert_url),
        }
    }

    /// Parse a JSON configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn demo_mode(&self) -> bool {
        self.feature_flag.is_demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_oss() {
        let config = ConsoleConfig::default();
        assert!(!config.demo_mode());
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);
        assert_eq!(config.expert_url, DEFAULT_EXPERT_URL);
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!("cloud".parse::<FeatureFlag>().unwrap(), FeatureFlag::Cloud);
        assert_eq!(" EE ".parse::<FeatureFlag>().unwrap(), FeatureFlag::Enterprise);
        assert_eq!("".parse::<FeatureFlag>().unwrap(), FeatureFlag::Oss);
        assert!("saas".parse::<FeatureFlag>().is_err());
    }

    #[test]
    fn test_demo_mode_for_hosted_flavors() {
        assert!(FeatureFlag::Cloud.is_demo());
        assert!(FeatureFlag::Enterprise.is_demo());
        assert!(!FeatureFlag::Oss.is_demo());
    }

    #[test]
    fn test_unknown_flag_falls_back_to_oss() {
        let config = ConsoleConfig::from_values(Some("nightly"), None, Some("https://example.com/call"));
        assert_eq!(config.feature_flag, FeatureFlag::Oss);
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);
        assert_eq!(config.expert_url, "https://example.com/call");
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = ConsoleConfig::from_json(r#"{ "feature_flag": "ee" }"#).unwrap();
        assert_eq!(config.feature_flag, FeatureFlag::Enterprise);
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ConsoleConfig::from_json("{ feature_flag").unwrap_err();
        assert!(matches!(err, NavError::InvalidConfig { .. }));
    }
}
