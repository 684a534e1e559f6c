//! Runtime configuration for the upstream client.
//!
//! [`RelayConfig`] is built once from [`RunArgs`] at process entry and
//! handed to [`OmdbClient`](crate::movies::upstream::OmdbClient). Nothing
//! downstream reads the environment.

use std::time::Duration;

use url::Url;

use crate::cli::RunArgs;
use crate::error::RelayError;

pub const DEFAULT_UPSTREAM_URL: &str = "https://www.omdbapi.com/";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Attached as `apikey` to every upstream call. Sent empty when unset.
    pub api_key: Option<String>,
    pub upstream_url: Url,
    pub timeout: Duration,
}

impl RelayConfig {
    pub fn new(
        api_key: Option<String>,
        upstream_url: &str,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let upstream_url = parse_upstream_url(upstream_url)?;
        let api_key = api_key.filter(|k| !k.is_empty());
        Ok(Self {
            api_key,
            upstream_url,
            timeout,
        })
    }

    pub fn from_args(args: &RunArgs) -> Result<Self, RelayError> {
        Self::new(
            args.api_key.clone(),
            &args.upstream_url,
            Duration::from_millis(args.timeout),
        )
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}

fn parse_upstream_url(raw: &str) -> Result<Url, RelayError> {
    let url = Url::parse(raw).map_err(|e| RelayError::UpstreamUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RelayError::UpstreamUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(RelayConfig::new(None, "http://localhost:9000/", Duration::from_secs(1)).is_ok());
        assert!(RelayConfig::new(None, DEFAULT_UPSTREAM_URL, Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        let err = RelayConfig::new(None, "ftp://example.com/", Duration::from_secs(1)).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn rejects_garbage_url() {
        assert!(RelayConfig::new(None, "not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn empty_api_key_is_treated_as_missing() {
        let config =
            RelayConfig::new(Some(String::new()), DEFAULT_UPSTREAM_URL, Duration::from_secs(1))
                .unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_key(), "");
    }
}
