//! Outbound calls to the movie database.
//!
//! [`MovieApi`] is the seam between the route handlers and the network.
//! [`OmdbClient`] is the production implementation over the shared
//! hyper client; tests swap in fakes through the same trait.

use std::time::Instant;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::header::HeaderMap;
use url::Url;

use crate::config::RelayConfig;
use crate::error::UpstreamFailure;
use crate::server::HttpClient;

use super::lookup::Lookup;

/// Redirect hops followed before the call is abandoned.
pub const MAX_REDIRECTS: usize = 5;

// Held as Arc<dyn MovieApi>, so async_trait rather than native async fn.
#[async_trait]
pub trait MovieApi: Send + Sync {
    fn name(&self) -> &'static str;

    /// Perform one upstream lookup, following redirects up to
    /// [`MAX_REDIRECTS`]. A success yields the raw body.
    async fn lookup(&self, lookup: &Lookup) -> Result<Bytes, UpstreamFailure>;
}

pub struct OmdbClient {
    client: HttpClient,
    config: RelayConfig,
}

impl OmdbClient {
    #[must_use]
    pub const fn new(client: HttpClient, config: RelayConfig) -> Self {
        Self { client, config }
    }

    async fn get(&self, url: &Url) -> Result<hyper::Response<Incoming>, UpstreamFailure> {
        let req = hyper::Request::builder()
            .method(hyper::Method::GET)
            .uri(url.as_str())
            .header(hyper::header::ACCEPT, "application/json")
            .body(Full::new(Bytes::new()))
            .map_err(UpstreamFailure::network)?;

        self.client
            .request(req)
            .await
            .map_err(UpstreamFailure::network)
    }

    async fn send(&self, lookup: &Lookup) -> Result<Bytes, UpstreamFailure> {
        let mut url = lookup.to_url(&self.config.upstream_url, self.config.api_key());
        let mut hops = 0;

        loop {
            let response = self.get(&url).await?;
            let status = response.status();

            if status.is_redirection() {
                if let Some(next) = redirect_target(&url, response.headers()) {
                    if hops == MAX_REDIRECTS {
                        return Err(UpstreamFailure::network(format!(
                            "gave up after {MAX_REDIRECTS} redirects"
                        )));
                    }
                    hops += 1;
                    // The URL carries the API key, so only the hop count is logged.
                    tracing::debug!(status = %status, hops, "following upstream redirect");
                    url = next;
                    continue;
                }
            }

            if !status.is_success() {
                // A failed read still counts as a status failure.
                let body = response
                    .into_body()
                    .collect()
                    .await
                    .map(http_body_util::Collected::to_bytes)
                    .unwrap_or_default();
                return Err(UpstreamFailure::Status { status, body });
            }

            let collected = response
                .into_body()
                .collect()
                .await
                .map_err(UpstreamFailure::network)?;
            return Ok(collected.to_bytes());
        }
    }
}

/// Resolve a `Location` header against the URL that produced it. Only
/// http and https targets are followed.
fn redirect_target(current: &Url, headers: &HeaderMap) -> Option<Url> {
    let location = headers.get(hyper::header::LOCATION)?.to_str().ok()?;
    let next = current.join(location).ok()?;
    matches!(next.scheme(), "http" | "https").then_some(next)
}

#[async_trait]
impl MovieApi for OmdbClient {
    fn name(&self) -> &'static str {
        "omdb"
    }

    #[allow(clippy::cast_possible_truncation)]
    async fn lookup(&self, lookup: &Lookup) -> Result<Bytes, UpstreamFailure> {
        let start = Instant::now();
        let result = tokio::time::timeout(self.config.timeout, self.send(lookup))
            .await
            .unwrap_or_else(|_| {
                Err(UpstreamFailure::network(format!(
                    "request timed out after {}ms",
                    self.config.timeout.as_millis()
                )))
            });
        let latency_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(body) => tracing::debug!(
                mode = lookup.mode(),
                bytes = body.len(),
                latency_ms,
                "upstream responded"
            ),
            Err(e) => tracing::debug!(
                mode = lookup.mode(),
                error = %e,
                latency_ms,
                "upstream call failed"
            ),
        }
        result
    }
}
