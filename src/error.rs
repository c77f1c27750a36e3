//! Error types for upstream calls and configuration loading

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single call to an upstream service (VirusTotal or Keitaro)
///
/// Every variant is terminal for the call that produced it. Nothing in this
/// crate retries. Underlying errors are rendered in the message rather than
/// exposed as a source, so an error chain prints each cause once.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built (malformed URL or header value)
    #[error("could not build request: {0}")]
    Request(reqwest::Error),

    /// Connection-level failure: DNS, refused connection, timeout
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// Upstream answered with a non-success status code
    #[error("upstream returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, when it was read
        body: Option<String>,
    },

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),

    /// The response body was not the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(serde_json::Error),

    /// Upstream reported an error object in its payload (raw checks only)
    #[error("upstream reported error {code}: {message}")]
    UpstreamReported {
        /// Error code as reported by the service
        code: String,
        /// Error message as reported by the service
        message: String,
    },
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

impl FetchError {
    /// HTTP status code carried by this error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Drop the request URL from transport-level errors
    ///
    /// For endpoints that carry a credential in the URL path.
    #[must_use]
    pub fn without_url(self) -> Self {
        match self {
            Self::Request(e) => Self::Request(e.without_url()),
            Self::Transport(e) => Self::Transport(e.without_url()),
            Self::Body(e) => Self::Body(e.without_url()),
            other => other,
        }
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config file {path}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config file {path}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}
