//! omdb-relay is an HTTP relay in front of the OMDb movie API.
//!
//! It exposes a title search and an id lookup, attaches the configured
//! API key to each upstream call, and returns the upstream JSON unchanged.
//! Failed calls are reduced to a generic message: the upstream status is
//! echoed when there was one, otherwise the caller gets a 502.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, health).
//! - [`config`] -- [`RelayConfig`](config::RelayConfig), built once at startup.
//! - [`error`] -- Process-level and upstream error types using `thiserror`.
//! - [`health`] -- `GET /health` endpoint handler returning runtime diagnostics.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`movies`] -- Route handlers, upstream lookups, and error normalization.
//! - [`server`] -- Axum server setup, shared application state, HTTP client, and
//!   graceful shutdown.

// Public items are consumed by the binary and tests only.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod movies;
pub mod server;
