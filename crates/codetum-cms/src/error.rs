use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(crate) const UNKNOWN_ERROR_NAME: &str = "unknownError";
pub(crate) const UNKNOWN_ERROR_MESSAGE: &str =
    "Unknown error occurred. This is probably an issue with the API itself.";
const HTTP_ERROR_NAME: &str = "httpError";
const INVALID_RESPONSE_NAME: &str = "invalidResponse";

/// Error returned by every `CmsClient` operation
///
/// Mirrors the `{ status, name, message }` body the CMS API sends on failure.
/// Failures that never produced a response are reported as status 500 with
/// the name `unknownError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{name} ({status}): {message}")]
pub struct CmsError {
    pub status: u16,
    pub name: String,
    pub message: String,
}

impl CmsError {
    /// The error reported when the request produced no HTTP response
    pub fn unknown() -> Self {
        Self {
            status: 500,
            name: UNKNOWN_ERROR_NAME.to_string(),
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }

    /// A 2xx body that did not match the expected shape
    pub(crate) fn invalid_response(status: u16, source: &serde_json::Error) -> Self {
        Self {
            status,
            name: INVALID_RESPONSE_NAME.to_string(),
            message: source.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_ERROR_NAME
    }
}

/// Why a request did not yield a success body
#[derive(Debug)]
pub(crate) enum RequestFailure {
    /// No HTTP response was received (DNS, refused connection, TLS, reset)
    Transport(anyhow::Error),
    /// The API answered with a non-2xx status
    Api { status: u16, body: String },
}

impl From<RequestFailure> for CmsError {
    fn from(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::Transport(_) => CmsError::unknown(),
            RequestFailure::Api { status, body } => {
                let parsed: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
                let name = body_field(&parsed, "name");
                let message = body_field(&parsed, "message");
                CmsError {
                    status,
                    name: name.unwrap_or_else(|| HTTP_ERROR_NAME.to_string()),
                    message: message.unwrap_or_else(|| fallback_message(status, body)),
                }
            }
        }
    }
}

/// Reads one field of an error body; non-string values keep their JSON text
fn body_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn fallback_message(status: u16, body: String) -> String {
    if !body.trim().is_empty() {
        return body;
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Request failed")
        .to_string()
}

/// Errors raised while building a client from its configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is not a valid HTTP header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}
