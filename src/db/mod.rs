//! Data-access layer for the hosted PostgREST backend.
//!
//! This module provides the client abstraction the prober talks to:
//! - Connection settings resolved from the environment
//! - Request building (projection, equality filters, row limit)
//! - A blocking HTTP implementation of the client trait
//! - Loosely-typed record access with default fallbacks
//!
//! # Type Decisions
//!
//! **Why `serde_json::Map` for records instead of typed structs?**
//! The tool probes tables whose schema it does not know. Rows are passed
//! through for display unmodified, and the few fields it reads (`title`, `id`)
//! are looked up optimistically with a fallback.
//!
//! **Why a single `DbError` for every query failure?**
//! Network, auth, missing-table and permission failures are all handled the
//! same way by the caller: report and move on to the next query.

mod backend;
mod config;
mod query;
mod rest;
mod value;

pub use backend::DataClient;
pub use config::{ClientConfig, KEY_VAR, URL_VAR};
pub use query::{filter_literal, Filter, SelectRequest};
pub use rest::{parse_content_range, RestClient};
pub use value::{DatabaseValue, Record, RecordExt};

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Response for '{table}' carried no usable row count")]
    MissingCount { table: String },
}
