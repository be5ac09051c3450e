// Configuration type definitions

use serde::Deserialize;

/// Endpoint used when neither the config file nor the CLI provides one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/query";

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}

/// Query endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            url: default_endpoint_url(),
        }
    }
}

/// UI configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Show the popular questions grid while nothing has been asked yet
    #[serde(default = "default_true")]
    pub show_suggestions: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_suggestions: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT);
        assert!(config.ui.show_suggestions);
    }

    #[test]
    fn test_endpoint_url_parsed() {
        let config: Config = toml::from_str(
            r#"
[endpoint]
url = "https://travel.example.com/query"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint.url, "https://travel.example.com/query");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[ui]\nshow_suggestions = \"yes\"\n");
        assert!(config.is_err());
    }

    // For any combination of present/missing sections and fields, parsing succeeds
    // and every missing field falls back to its default.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_endpoint_section in prop::bool::ANY,
            include_url_field in prop::bool::ANY,
            include_ui_section in prop::bool::ANY,
            show_suggestions in prop::option::of(prop::bool::ANY),
        ) {
            let mut toml_content = String::new();
            if include_endpoint_section {
                toml_content.push_str("[endpoint]\n");
                if include_url_field {
                    toml_content.push_str("url = \"http://127.0.0.1:9000/query\"\n");
                }
            }
            if include_ui_section {
                toml_content.push_str("[ui]\n");
                if let Some(show) = show_suggestions {
                    toml_content.push_str(&format!("show_suggestions = {}\n", show));
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config: {}", toml_content);
            let config = config.unwrap();

            if include_endpoint_section && include_url_field {
                prop_assert_eq!(config.endpoint.url.as_str(), "http://127.0.0.1:9000/query");
            } else {
                prop_assert_eq!(config.endpoint.url.as_str(), DEFAULT_ENDPOINT);
            }

            let expected_show = if include_ui_section {
                show_suggestions.unwrap_or(true)
            } else {
                true
            };
            prop_assert_eq!(config.ui.show_suggestions, expected_show);
        }
    }
}
