//! Mapping of request failures to client-facing responses.
//!
//! Upstream error bodies never reach the caller: an upstream status is
//! echoed with a generic message, and anything without a response becomes
//! a 502.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::UpstreamFailure;

pub const MISSING_TITLE: &str = "Title query parameter is required";
pub const API_ERROR: &str = "An API error has occurred";
pub const NETWORK_ERROR: &str = "A network error has occurred";

/// Body for rejected client input.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for a failed upstream call.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    MissingParameter(&'static str),
    Upstream(UpstreamFailure),
}

impl From<UpstreamFailure> for ApiError {
    fn from(failure: UpstreamFailure) -> Self {
        Self::Upstream(failure)
    }
}

#[must_use]
pub fn normalize(failure: &UpstreamFailure) -> (StatusCode, MessageBody) {
    let (status, message) = match failure {
        UpstreamFailure::Status { status, .. } => (*status, API_ERROR),
        UpstreamFailure::Network { .. } => (StatusCode::BAD_GATEWAY, NETWORK_ERROR),
    };
    (
        status,
        MessageBody {
            message: message.to_string(),
        },
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingParameter(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: message.to_string(),
                }),
            )
                .into_response(),
            Self::Upstream(failure) => {
                let (status, body) = normalize(&failure);
                (status, Json(body)).into_response()
            }
        }
    }
}
