//! Table probing and fixed filtered queries.
//!
//! A run has two phases:
//! - **Probe**: try each candidate table in order with a small select and stop
//!   at the first one that returns rows.
//! - **Filtered queries**: run each configured equality-filtered select,
//!   regardless of what the probe found.
//!
//! Every request is made once. Failures are captured in the report and never
//! stop the run.

mod execute;
mod output;
mod output_tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{DataClient, SelectRequest};
use crate::output::Outputable;

/// Table names tried when none are configured.
pub const DEFAULT_CANDIDATES: [&str; 5] = ["todos", "users", "posts", "products", "customers"];

/// Rows requested from each candidate.
pub const DEFAULT_PROBE_LIMIT: u32 = 3;

/// Table whose empty result triggers the diagnostic row count.
pub const DEFAULT_COUNT_FALLBACK_TABLE: &str = "todos";

/// Trait for executing a probe step against a data client.
///
/// Execution is infallible: query failures become part of the output.
pub trait Execute {
    type Output: Outputable;

    fn execute(&self, client: &dyn DataClient) -> Self::Output;
}

/// Ordered candidate probing settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProbe {
    pub candidates: Vec<String>,
    pub limit: u32,
    /// When this candidate comes back empty, ask for an exact row count.
    pub count_fallback_table: Option<String>,
}

impl Default for CandidateProbe {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            limit: DEFAULT_PROBE_LIMIT,
            count_fallback_table: Some(DEFAULT_COUNT_FALLBACK_TABLE.to_string()),
        }
    }
}

/// Equality filter of a fixed query, e.g. `completed = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualityFilter {
    pub column: String,
    pub value: Value,
}

/// A fixed query: equality filter, projection and row limit on one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredQuery {
    /// Line shown above the matching rows.
    #[serde(default = "default_heading")]
    pub heading: String,
    /// Line shown when no rows match.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    pub table: String,
    /// Empty selects every column.
    #[serde(default)]
    pub columns: Vec<String>,
    pub filter: EqualityFilter,
    pub limit: u32,
    #[serde(default = "default_title_field")]
    pub title_field: String,
    #[serde(default = "default_id_field")]
    pub id_field: String,
}

fn default_heading() -> String {
    "Matching rows".to_string()
}

fn default_empty_message() -> String {
    "No matching rows found".to_string()
}

fn default_title_field() -> String {
    "title".to_string()
}

fn default_id_field() -> String {
    "id".to_string()
}

impl FilteredQuery {
    /// The incomplete-todos query: `todos` where `completed = false`.
    pub fn incomplete_todos() -> Self {
        Self {
            heading: "Incomplete todos".to_string(),
            empty_message: "No incomplete todos found".to_string(),
            table: "todos".to_string(),
            columns: vec!["id".to_string(), "title".to_string(), "completed".to_string()],
            filter: EqualityFilter {
                column: "completed".to_string(),
                value: Value::Bool(false),
            },
            limit: 5,
            title_field: default_title_field(),
            id_field: default_id_field(),
        }
    }

    /// The select request this query sends.
    pub fn request(&self) -> SelectRequest {
        SelectRequest::new(&self.table)
            .columns(self.columns.iter().cloned())
            .eq(&self.filter.column, self.filter.value.clone())
            .limit(self.limit)
    }
}

/// Everything one run does: the candidate probe, then the fixed queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbePlan {
    pub probe: CandidateProbe,
    pub queries: Vec<FilteredQuery>,
}

impl Default for ProbePlan {
    fn default() -> Self {
        Self {
            probe: CandidateProbe::default(),
            queries: vec![FilteredQuery::incomplete_todos()],
        }
    }
}
