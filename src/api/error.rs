use thiserror::Error;

/// Errors produced while talking to the posts API.
///
/// The variants exist for diagnostics; the view maps every one of them to the
/// same action-specific message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Malformed post at index {index}: {reason}")]
    InvalidPost { index: usize, reason: &'static str },
}
