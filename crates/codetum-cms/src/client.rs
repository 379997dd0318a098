use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::error::{CmsError, ConfigError, RequestFailure};
use crate::http::{HttpClient, ReqwestClient};
use crate::types::{Content, ContentOptions, ContentQueryOptions, Space};

/// Read-only client for one CMS space
///
/// Generic over the HTTP client implementation so the transport can be tuned
/// or replaced. Holds nothing but its configuration, so clones are cheap and
/// any number of calls may run concurrently.
#[derive(Debug, Clone)]
pub struct CmsClient<H: HttpClient = ReqwestClient> {
    http: H,
    base_url: String,
    headers: HeaderMap,
}

impl CmsClient<ReqwestClient> {
    /// Creates a client for the hosted API
    ///
    /// Performs no network I/O. Fails only if `api_key` cannot be sent as a
    /// header value.
    pub fn new(space_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::from_config(ClientConfig::new(space_id, api_key))
    }

    /// Creates a client from explicit settings
    pub fn from_config(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::with_http_client(config, ReqwestClient::new())
    }
}

impl<H: HttpClient> CmsClient<H> {
    /// Creates a client that sends requests through `http`
    pub fn with_http_client(config: ClientConfig, http: H) -> Result<Self, ConfigError> {
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        Ok(Self {
            http,
            base_url: config.base_url(),
            headers,
        })
    }

    /// Base URL all request paths are relative to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let params: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }

    /// Performs a GET against the space and decodes the success body
    ///
    /// Every failure leaves here as a `CmsError`.
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CmsError> {
        let url = self.build_url(path, query);
        tracing::debug!(path, params = query.len(), "Sending CMS request");

        let response = self
            .http
            .get_response(&url, &self.headers)
            .await
            .map_err(|e| {
                tracing::debug!(path, "CMS request got no response: {e:#}");
                RequestFailure::Transport(e)
            })?;

        tracing::debug!(path, status = response.status, "Received CMS response");

        if !response.is_success() {
            return Err(RequestFailure::Api {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        tracing::trace!(path, bytes = response.body.len(), "Decoding CMS response");
        response
            .json()
            .map_err(|e| CmsError::invalid_response(response.status, &e))
    }
}

// Content-related methods
impl<H: HttpClient> CmsClient<H> {
    /// Gets the space's metadata
    pub async fn get_space(&self) -> Result<Space, CmsError> {
        self.request("/", &[]).await
    }

    /// Gets a single-type or collection-type entry by its content ID
    ///
    /// `id` is percent-encoded as one path segment, so `a/b` is sent as `a%2Fb`.
    pub async fn find_by_id(
        &self,
        id: &str,
        options: Option<&ContentOptions>,
    ) -> Result<Content, CmsError> {
        let path = format!("/content/{}", urlencoding::encode(id));
        let query = options.map(ContentOptions::query_pairs).unwrap_or_default();
        self.request(&path, &query).await
    }

    /// Gets the entry of a single type by content type slug
    ///
    /// `slug` is percent-encoded as one path segment.
    pub async fn find_one(
        &self,
        slug: &str,
        options: Option<&ContentOptions>,
    ) -> Result<Content, CmsError> {
        let path = format!("/single-type/{}", urlencoding::encode(slug));
        let query = options.map(ContentOptions::query_pairs).unwrap_or_default();
        self.request(&path, &query).await
    }

    /// Gets the entries of a collection type by content type slug
    ///
    /// Returns one page as sent by the API; no further pages are fetched.
    /// `slug` is percent-encoded as one path segment.
    pub async fn find_many(
        &self,
        slug: &str,
        options: Option<&ContentQueryOptions>,
    ) -> Result<Vec<Content>, CmsError> {
        let path = format!("/collection-type/{}", urlencoding::encode(slug));
        let query = options
            .map(ContentQueryOptions::query_pairs)
            .unwrap_or_default();
        self.request(&path, &query).await
    }
}
