//! Unified error types for omdb-relay.
//!
//! [`RelayError`] covers process-level failures (startup, the `health`
//! subcommand). [`UpstreamFailure`] is the tagged outcome of a failed
//! upstream call and is what the normalizer in
//! [`movies::normalize`](crate::movies::normalize) matches on. Both use
//! `thiserror` for `Display` and `Error` derives.

use bytes::Bytes;
use hyper::StatusCode;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RelayError {
    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid upstream URL '{url}': {reason}")]
    UpstreamUrl { url: String, reason: String },

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(StatusCode),
}

/// Why an upstream lookup did not produce a usable body.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamFailure {
    /// The upstream answered, but with a non-success status.
    #[error("upstream responded with status {status}")]
    Status { status: StatusCode, body: Bytes },

    /// No complete response was received.
    #[error("upstream unreachable: {source}")]
    Network {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl UpstreamFailure {
    pub fn network(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Network {
            source: source.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Status { .. } => "upstream_error",
            Self::Network { .. } => "network_error",
        }
    }
}
