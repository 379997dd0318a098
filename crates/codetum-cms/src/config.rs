use serde::{Deserialize, Serialize};

/// Public endpoint of the hosted CMS API
pub const DEFAULT_API_URL: &str = "https://api.cms.codetum.com";

/// Header carrying the space API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Connection settings for a single space
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub space_id: String,
    pub api_key: String,
    /// Root of the API, without the `/spaces/...` suffix
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ClientConfig {
    pub fn new(space_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            api_key: api_key.into(),
            api_url: default_api_url(),
        }
    }

    /// Points the client at a different API host (staging, local mock)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> String {
        format!(
            "{}/spaces/{}",
            self.api_url.trim_end_matches('/'),
            self.space_id
        )
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("space_id", &self.space_id)
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}
