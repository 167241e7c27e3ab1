//! PostgREST backend over blocking HTTP.
//!
//! Talks to the `/rest/v1/<table>` endpoints of a hosted project. Every request
//! carries the project key both as `apikey` and as a bearer token, which is
//! what the hosted gateway expects for anonymous and service keys alike.

mod content_range;

pub use content_range::parse_content_range;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Method, Url};
use serde::Deserialize;
use tracing::debug;

use super::backend::DataClient;
use super::config::ClientConfig;
use super::query::SelectRequest;
use super::value::Record;
use super::DbError;

/// Error payload returned by PostgREST on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Blocking client for a PostgREST endpoint.
pub struct RestClient {
    http: Client,
    rest_url: Url,
    key: String,
}

impl RestClient {
    /// Create a client for the project at `config.url`.
    ///
    /// No request is made here; the first network activity happens on the
    /// first query.
    pub fn new(config: &ClientConfig) -> Result<Self, DbError> {
        let http = Client::builder().build().map_err(|e| DbError::ClientBuild {
            message: e.to_string(),
        })?;

        let mut rest_url = config.url.clone();
        rest_url
            .path_segments_mut()
            .map_err(|_| DbError::ClientBuild {
                message: format!("'{}' cannot be used as a base URL", config.url),
            })?
            .pop_if_empty()
            .extend(["rest", "v1"]);

        Ok(Self {
            http,
            rest_url,
            key: config.key.clone(),
        })
    }

    /// Endpoint URL for a table. The name is percent-encoded as a path segment.
    pub fn table_url(&self, table: &str) -> Url {
        let mut url = self.rest_url.clone();
        // rest_url is http(s) and already carries path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(table);
        }
        url
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.key)
            .header(AUTHORIZATION, format!("Bearer {}", self.key))
            .header(ACCEPT, "application/json")
    }

    fn send(&self, builder: RequestBuilder) -> Result<Response, DbError> {
        let response = builder.send().map_err(|e| DbError::Transport {
            message: e.to_string(),
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(status_error(response))
        }
    }
}

/// Turn a non-2xx response into a `DbError::Status`, preferring the
/// backend's own `message` (plus `hint`) over the raw body.
fn status_error(response: Response) -> DbError {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    DbError::Status {
        status: status.as_u16(),
        message,
    }
}

fn error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message), hint: Some(hint) }) => {
            Some(format!("{} (hint: {})", message, hint))
        }
        Ok(ErrorBody { message: Some(message), .. }) => Some(message),
        _ => Some(body.trim().to_string()),
    }
}

impl DataClient for RestClient {
    fn select(&self, request: &SelectRequest) -> Result<Vec<Record>, DbError> {
        let params = request.to_query_pairs();
        debug!(table = %request.table, ?params, "select");

        let response = self.send(self.request(Method::GET, &request.table).query(&params))?;

        response.json::<Vec<Record>>().map_err(|e| DbError::Decode {
            message: e.to_string(),
        })
    }

    fn count(&self, table: &str) -> Result<u64, DbError> {
        debug!(table, "exact count");

        let response = self.send(
            self.request(Method::HEAD, table)
                .query(&[("select", "*")])
                .header("Prefer", "count=exact"),
        )?;

        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range)
            .ok_or_else(|| DbError::MissingCount {
                table: table.to_string(),
            })
    }

    fn backend_name(&self) -> &'static str {
        "PostgREST"
    }
}
