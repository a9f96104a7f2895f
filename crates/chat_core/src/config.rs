use serde::{Deserialize, Serialize};

use crate::paths;

/// Endpoint configuration resolved at startup.
///
/// Values left unset fall back to the client defaults. Precedence is
/// config.json in the app data dir, then a local config.toml, then the
/// GEMINI_API_BASE / GEMINI_MODEL environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

const CONFIG_FILE_PATH: &str = "config.toml";

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config {
            api_base: None,
            model: None,
        };

        let mut loaded = false;
        let json_path = paths::config_json_path();
        if json_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&json_path) {
                if let Ok(file_config) = serde_json::from_str::<Config>(&content) {
                    config = file_config;
                    loaded = true;
                }
            }
        }

        if !loaded && std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(api_base) = std::env::var("GEMINI_API_BASE") {
            config.api_base = Some(api_base);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = Some(model);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_none() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.api_base.is_none());
        assert!(config.model.is_none());
    }

    #[test]
    fn toml_form_parses() {
        let config: Config = toml::from_str(
            r#"
            api_base = "https://proxy.example.com/v1beta"
            model = "gemini-1.5-flash"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api_base.as_deref(),
            Some("https://proxy.example.com/v1beta")
        );
        assert_eq!(config.model.as_deref(), Some("gemini-1.5-flash"));
    }

    #[test]
    fn json_form_parses() {
        let config: Config =
            serde_json::from_str(r#"{"api_base": null, "model": "gemini-pro"}"#).unwrap();
        assert!(config.api_base.is_none());
        assert_eq!(config.model.as_deref(), Some("gemini-pro"));
    }
}
