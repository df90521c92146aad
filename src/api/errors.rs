/// Errors from the Humanitec API client layer.
use thiserror::Error;

/// Typed errors from the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token configured. Checked before any request is sent.
    #[error("Humanitec API token is required")]
    MissingToken,

    /// No organization configured. Checked before any request is sent.
    #[error("Humanitec organization ID is required")]
    MissingOrg,

    /// The configured base URL is not a usable http(s) URL.
    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),

    /// The request could not be built, sent, or completed (including timeouts).
    #[error("failed to make request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than the one the operation expects.
    #[error("API request failed with status {status}")]
    Status {
        /// HTTP status code received.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Failure reported by a non-HTTP client implementation.
    #[error("{0}")]
    #[cfg(test)]
    Backend(String),
}

impl ApiError {
    /// Machine-readable code for the error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::MissingOrg => "missing_org",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Transport(_) => "transport_error",
            Self::Status { .. } => "api_error",
            Self::Decode(_) => "decode_error",
            #[cfg(test)]
            Self::Backend(_) => "backend_error",
        }
    }
}
