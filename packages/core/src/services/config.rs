//! Client configuration
use serde::{Deserialize, Serialize};

/// Largest page the service accepts
const MAX_PAGE_SIZE: u32 = 100;

/// Settings shared by the facade and the transport behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root, without the `/v1` context
    pub base_url: String,

    /// Value of the `Notion-Version` header
    pub api_version: String,

    /// Page size used when a list call carries no pagination request
    pub default_page_size: Option<u32>,

    /// Request timeout handed to the transport
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.notion.com".to_string(),
            api_version: "2021-05-13".to_string(),
            default_page_size: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = Some(page_size);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url cannot be empty".to_string());
        }

        if self.api_version.trim().is_empty() {
            return Err("api_version cannot be empty".to_string());
        }

        if let Some(size) = self.default_page_size {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(format!(
                    "default_page_size must be between 1 and {}",
                    MAX_PAGE_SIZE
                ));
            }
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_version, "2021-05-13");
        assert_eq!(config.base_url, "https://api.notion.com");
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(ClientConfig::default().with_page_size(100).validate().is_ok());
        assert!(ClientConfig::default().with_page_size(0).validate().is_err());
        assert!(ClientConfig::default().with_page_size(101).validate().is_err());
    }

    #[test]
    fn test_rejects_empty_fields() {
        let config = ClientConfig {
            api_version: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("api_version"));

        let config = ClientConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserializes_from_json() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "base_url": "http://localhost:8080",
            "api_version": "2021-05-13",
            "default_page_size": 25,
            "timeout_secs": 5
        }))
        .unwrap();
        assert_eq!(config.default_page_size, Some(25));
        assert!(config.validate().is_ok());
    }
}
