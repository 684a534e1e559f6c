//! `omdb-relay run`: start the relay server.
//!
//! Builds the [`RelayConfig`] from the parsed flags, wires the OMDb client
//! into the Axum router, and serves until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::logging;
use crate::movies::upstream::OmdbClient;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), RelayError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let config = RelayConfig::from_args(&args)?;
    if config.api_key.is_none() {
        tracing::warn!("no OMDb API key configured; upstream calls will be rejected");
    }

    let upstream = config.upstream_url.clone();
    let timeout_ms = args.timeout;
    let client = OmdbClient::new(server::build_http_client(), config);
    let state = Arc::new(AppState::new(Arc::new(client)));

    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        upstream = %upstream,
        timeout_ms,
        "omdb-relay started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("omdb-relay stopped");
    Ok(())
}
