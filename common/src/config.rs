//! Wizard configuration.
//!
//! Every field has a default, so an override document only needs to name
//! what it changes, e.g. `{"api_base": "http://localhost:5000"}`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::endpoints::Endpoints;
use crate::model::mapping::TEMPLATE_FIELDS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Prefix for every document service URL. Empty means same origin.
    pub api_base: String,
    /// Template fields offered in the mapping step.
    pub template_fields: Vec<String>,
    /// How long an error banner stays before fading out.
    pub banner_timeout_ms: u32,
    /// Length of the fade before the banner is detached.
    pub banner_fade_ms: u32,
    /// Rows offered by the preview selector when the service does not report a count.
    pub default_row_count: usize,
    pub log_level: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            template_fields: TEMPLATE_FIELDS.iter().map(|f| f.to_string()).collect(),
            banner_timeout_ms: 5000,
            banner_fade_ms: 150,
            default_row_count: 10,
            log_level: "info".to_string(),
        }
    }
}

impl WizardConfig {
    /// Parses an override document on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: WizardConfig = serde_json::from_str(json)?;
        if config.template_fields.iter().all(|f| f.trim().is_empty()) {
            config.template_fields = WizardConfig::default().template_fields;
        }
        Ok(config)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base.clone())
    }

    /// Unknown level names fall back to `info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = WizardConfig::from_json(r#"{"api_base": "http://localhost:5000"}"#).unwrap();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.banner_timeout_ms, 5000);
        assert_eq!(config.template_fields.len(), 4);
    }

    #[test]
    fn empty_field_list_restores_defaults() {
        let config = WizardConfig::from_json(r#"{"template_fields": []}"#).unwrap();
        assert_eq!(config.template_fields[0], "name");
    }

    #[test]
    fn log_level_parsing() {
        let mut config = WizardConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(WizardConfig::from_json("{not json").is_err());
    }
}
