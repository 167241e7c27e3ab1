//! Tagged per-attempt results.
//!
//! Each query is recorded as data (found / empty / failed) instead of being
//! propagated as an error, so one failing table never hides the rest.

use serde::Serialize;

use crate::db::Record;

/// Result of the diagnostic exact count on an empty table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CountCheck {
    Counted { total: u64 },
    Failed { message: String },
}

/// Result of probing one candidate table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Found {
        records: Vec<Record>,
    },
    Empty {
        #[serde(skip_serializing_if = "Option::is_none")]
        count_check: Option<CountCheck>,
    },
    Failed {
        message: String,
    },
}

/// One candidate and what happened when it was queried.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableAttempt {
    pub table: String,
    pub outcome: ProbeOutcome,
}

/// All candidates attempted, in order. Probing stops after the first `Found`,
/// so at most the last attempt is `Found`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbeSummary {
    pub attempts: Vec<TableAttempt>,
}

impl ProbeSummary {
    /// Name of the table that returned rows, if any did.
    pub fn matched_table(&self) -> Option<&str> {
        self.attempts
            .iter()
            .find(|a| matches!(a.outcome, ProbeOutcome::Found { .. }))
            .map(|a| a.table.as_str())
    }
}

/// Result of one fixed filtered query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FilteredOutcome {
    Rows { records: Vec<Record> },
    Empty,
    Failed { message: String },
}

/// A filtered query together with the display settings it was run with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredQueryReport {
    pub heading: String,
    pub table: String,
    #[serde(skip)]
    pub empty_message: String,
    #[serde(skip)]
    pub title_field: String,
    #[serde(skip)]
    pub id_field: String,
    pub outcome: FilteredOutcome,
}

/// Full report of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbeReport {
    pub probe: ProbeSummary,
    pub queries: Vec<FilteredQueryReport>,
}
