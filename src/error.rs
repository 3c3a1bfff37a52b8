//! Unified error types for Cloakbrowse

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Cloakbrowse
#[derive(Error, Debug)]
pub enum Error {
    /// Request requires an authorization token and none was configured
    #[error("Request to {url} requires an authorization token")]
    Authorization {
        /// URL of the rejected request
        url: String,
    },

    /// Connection could not be established or was aborted mid-flight
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// URL of the failed request
        url: String,
        /// Underlying transport error message
        message: String,
    },

    /// The transport call exceeded its timeout budget
    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout {
        /// URL of the timed-out request
        url: String,
        /// Timeout that was exceeded, in milliseconds
        timeout_ms: u64,
    },

    /// Well-formed HTTP error response from the profile service
    #[error("{message}")]
    Api {
        /// URL of the rejected request
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw decoded response body
        body: serde_json::Value,
        /// Human-readable message (taken from the body when present)
        message: String,
    },

    /// CDP endpoint never became reachable within the poll budget
    #[error("CDP endpoint {endpoint} not reachable after {elapsed_ms}ms")]
    PollTimeout {
        /// Health-check endpoint that was polled
        endpoint: String,
        /// Total wall-clock spent polling, in milliseconds
        elapsed_ms: u64,
    },

    /// Launch response carried no remote-debugging URL
    #[error("No connection URL received from launch response")]
    MissingConnectUrl,

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a new authorization error
    pub fn authorization<S: Into<String>>(url: S) -> Self {
        Error::Authorization { url: url.into() }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>, M: Into<String>>(url: S, message: M) -> Self {
        Error::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(url: S, timeout_ms: u64) -> Self {
        Error::Timeout {
            url: url.into(),
            timeout_ms,
        }
    }

    /// Create a new API error; the message comes from a `message` field in the
    /// response body when one is present
    pub fn api<S: Into<String>>(url: S, status: u16, body: serde_json::Value) -> Self {
        let url = url.into();
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request to {} failed with status {}", url, status));

        Error::Api {
            url,
            status,
            body,
            message,
        }
    }

    /// Create a new poll timeout error
    pub fn poll_timeout<S: Into<String>>(endpoint: S, elapsed_ms: u64) -> Self {
        Error::PollTimeout {
            endpoint: endpoint.into(),
            elapsed_ms,
        }
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }
}
