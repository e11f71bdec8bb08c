use crate::error::SnagError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// CSS selectors locating the fields on a store page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSelectors {
    /// Container holding the game name (first match wins)
    #[serde(default = "default_name_selector")]
    pub name: String,

    /// Developer/publisher rows, in page order
    #[serde(default = "default_developer_rows_selector")]
    pub developer_rows: String,

    /// Container holding the popular tags
    #[serde(default = "default_tags_selector")]
    pub tags: String,

    /// Links inside rows and the tags container
    #[serde(default = "default_link_selector")]
    pub link: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            name: default_name_selector(),
            developer_rows: default_developer_rows_selector(),
            tags: default_tags_selector(),
            link: default_link_selector(),
        }
    }
}

/// Configuration for the extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnaggerConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub selectors: PageSelectors,
}

impl Default for SnaggerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            selectors: PageSelectors::default(),
        }
    }
}

impl SnaggerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnagError> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| SnagError::Config(format!("cannot open {}: {}", path.display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| SnagError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SnagError> {
        serde_json::from_str(json).map_err(|e| SnagError::Config(format!("invalid config: {}", e)))
    }

    /// The request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    concat!("steam-tag-snagger/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_name_selector() -> String {
    "div.apphub_AppName".to_string()
}

fn default_developer_rows_selector() -> String {
    "div.dev_row".to_string()
}

fn default_tags_selector() -> String {
    "div.glance_tags.popular_tags".to_string()
}

fn default_link_selector() -> String {
    "a".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SnaggerConfig::from_json("{}").unwrap();
        assert_eq!(config, SnaggerConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.selectors.name, "div.apphub_AppName");
    }

    #[test]
    fn test_partial_selector_override() {
        let json = r#"{ "timeout_secs": 3, "selectors": { "tags": "section.tags" } }"#;
        let config = SnaggerConfig::from_json(json).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.selectors.tags, "section.tags");
        // Unspecified selectors keep their defaults
        assert_eq!(config.selectors.developer_rows, "div.dev_row");
        assert_eq!(config.selectors.link, "a");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SnaggerConfig::from_json("{ timeout_secs: ").unwrap_err();
        assert!(matches!(err, SnagError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = SnaggerConfig::from_file("/nonexistent/snagger.json").unwrap_err();
        match err {
            SnagError::Config(msg) => assert!(msg.contains("/nonexistent/snagger.json")),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
