use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_CONFIG_ELEMENT_ID: &str = "app-config";

/// Settings the host page can override through the `app-config` element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Id of the `<script type="application/json">` holding appointment data
    pub data_element_id: String,
    /// localStorage key for the last selected appointment
    pub selection_storage_key: String,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_element_id: "appointments-data".to_string(),
            selection_storage_key: "selected-appointment".to_string(),
            title: "Healthcare System".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn blank_input_yields_defaults() {
        assert_eq!(AppConfig::from_json("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            AppConfig::from_json(r#"{"data_element_id": "clinic-data", "extra": true}"#).unwrap();
        assert_eq!(config.data_element_id, "clinic-data");
        assert_eq!(config.selection_storage_key, "selected-appointment");
        assert_eq!(config.title, "Healthcare System");
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = AppConfig::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
