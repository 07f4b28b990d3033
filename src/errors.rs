use reqwest::StatusCode;
use thiserror::Error;

/// All errors that can occur when talking to the Zencoder API.
#[derive(Error, Debug)]
pub enum ZencoderError {
    /// No API key was configured and `ZENCODER_API_KEY` is not set.
    #[error("API key is required: pass it to ClientBuilder::api_key() or set ZENCODER_API_KEY")]
    MissingApiKey,

    /// A configured header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A transport-level failure (connection refused, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status other than the one the endpoint promises.
    #[error("unexpected status {status} (expected {expected})")]
    UnexpectedStatus {
        expected: StatusCode,
        status: StatusCode,
        /// Response text, when it could be read.
        body: Option<String>,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body was not the JSON shape the endpoint promises.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request value could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ZencoderError {
    /// The received HTTP status, if this is a status mismatch.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ZencoderError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A convenience alias for `Result<T, ZencoderError>`.
pub type Result<T> = std::result::Result<T, ZencoderError>;
