use serde::{Deserialize, Serialize};

/// Where the catalog API lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin prefixed to API paths, e.g. `https://catalog.example.com`.
    ///
    /// Empty means same-origin relative requests, which only work in the
    /// browser: outside wasm, reqwest rejects a URL without a host and every
    /// load fails with `LoadError::Network`. Native hosts must set an origin.
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute (or same-origin) URL for an API path starting with `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        assert_eq!(ApiConfig::default().endpoint("/api/music"), "/api/music");
    }

    #[test]
    fn test_strips_trailing_slash() {
        let config = ApiConfig::new("http://localhost:5173/");
        assert_eq!(
            config.endpoint("/api/music"),
            "http://localhost:5173/api/music"
        );
    }

    #[test]
    fn test_deserializes_with_missing_base_url() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_deserialized_trailing_slash_is_ignored() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url": "https://catalog.example.com/"}"#).unwrap();
        assert_eq!(
            config.endpoint("/api/music"),
            "https://catalog.example.com/api/music"
        );
    }
}
