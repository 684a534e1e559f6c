//! Movie route handlers.
//!
//! [`search_handler`] and [`details_handler`] turn an inbound request into a
//! [`Lookup`](lookup::Lookup), hand it to the configured
//! [`MovieApi`](upstream::MovieApi), and relay the upstream body verbatim.
//! Failures go through [`normalize`]. Submodules handle query construction
//! ([`lookup`]), the outbound call ([`upstream`]), and error mapping
//! ([`normalize`]).

pub mod lookup;
pub mod normalize;
pub mod upstream;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::server::AppState;
use lookup::Lookup;
use normalize::{ApiError, MISSING_TITLE};

pub const CORRELATION_HEADER: &str = "x-correlation-id";

pub async fn home_handler() -> Html<&'static str> {
    Html("<h1>Home</h1>")
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
    req_headers: HeaderMap,
) -> Response {
    let correlation_id = correlation_id(&req_headers);

    let Some(title) = lookup::title_param(query.as_deref()) else {
        state.stats.rejected.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(correlation_id = %correlation_id, "search rejected: missing title");
        return with_correlation_id(
            ApiError::MissingParameter(MISSING_TITLE).into_response(),
            &correlation_id,
        );
    };

    forward(&state, Lookup::Search(title), &correlation_id).await
}

pub async fn details_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    req_headers: HeaderMap,
) -> Response {
    let correlation_id = correlation_id(&req_headers);
    forward(&state, Lookup::ById(id), &correlation_id).await
}

async fn forward(state: &AppState, lookup: Lookup, correlation_id: &str) -> Response {
    tracing::info!(
        correlation_id = %correlation_id,
        mode = lookup.mode(),
        value = %lookup.value(),
        "forwarding lookup"
    );

    let response = match state.movies.lookup(&lookup).await {
        Ok(body) => {
            state.stats.forwarded.fetch_add(1, Ordering::Relaxed);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(failure) => {
            state.stats.failed.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                correlation_id = %correlation_id,
                mode = lookup.mode(),
                kind = failure.kind(),
                error = %failure,
                "lookup failed"
            );
            ApiError::from(failure).into_response()
        }
    };

    with_correlation_id(response, correlation_id)
}

fn correlation_id(req_headers: &HeaderMap) -> String {
    req_headers
        .get(CORRELATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from)
}

fn with_correlation_id(mut response: Response, correlation_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(correlation_id) {
        response.headers_mut().insert(CORRELATION_HEADER, value);
    }
    response
}
