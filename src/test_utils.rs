//! Shared test utilities for execute and output tests.
//!
//! `RecordingClient` is a scripted in-memory `DataClient`: each table is given
//! rows or a failure up front, and every call is logged so tests can assert on
//! exactly which requests were made.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::db::{DataClient, DbError, Record, SelectRequest};

/// Build a record from a `json!` object literal.
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("record() expects a JSON object, got {}", other),
    }
}

/// A request seen by the recording client.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Select(SelectRequest),
    Count(String),
}

/// Scripted client. Unknown tables fail the way PostgREST does for a missing
/// relation.
#[derive(Default)]
pub struct RecordingClient {
    rows: HashMap<String, Result<Vec<Record>, String>>,
    counts: HashMap<String, Result<u64, String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `table` to return `records` for any select.
    pub fn with_rows(mut self, table: &str, records: Vec<Record>) -> Self {
        self.rows.insert(table.to_string(), Ok(records));
        self
    }

    /// Script `table` to return no rows.
    pub fn with_empty(self, table: &str) -> Self {
        self.with_rows(table, Vec::new())
    }

    /// Script every select on `table` to fail with `message`.
    pub fn with_failure(mut self, table: &str, message: &str) -> Self {
        self.rows.insert(table.to_string(), Err(message.to_string()));
        self
    }

    /// Script the exact count for `table`.
    pub fn with_count(mut self, table: &str, total: u64) -> Self {
        self.counts.insert(table.to_string(), Ok(total));
        self
    }

    /// Script the exact count for `table` to fail.
    pub fn with_count_failure(mut self, table: &str, message: &str) -> Self {
        self.counts.insert(table.to_string(), Err(message.to_string()));
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Tables hit by select calls, in order.
    pub fn selected_tables(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::Select(req) => Some(req.table),
                RecordedCall::Count(_) => None,
            })
            .collect()
    }

    /// Tables hit by count calls, in order.
    pub fn counted_tables(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::Count(table) => Some(table),
                RecordedCall::Select(_) => None,
            })
            .collect()
    }

    fn missing_relation(table: &str) -> DbError {
        DbError::Status {
            status: 404,
            message: format!("relation \"public.{}\" does not exist", table),
        }
    }
}

impl DataClient for RecordingClient {
    fn select(&self, request: &SelectRequest) -> Result<Vec<Record>, DbError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Select(request.clone()));

        match self.rows.get(&request.table) {
            Some(Ok(records)) => {
                let limit = request.limit.map_or(records.len(), |l| l as usize);
                Ok(records.iter().take(limit).cloned().collect())
            }
            Some(Err(message)) => Err(DbError::Transport {
                message: message.clone(),
            }),
            None => Err(Self::missing_relation(&request.table)),
        }
    }

    fn count(&self, table: &str) -> Result<u64, DbError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Count(table.to_string()));

        match self.counts.get(table) {
            Some(Ok(total)) => Ok(*total),
            Some(Err(message)) => Err(DbError::Transport {
                message: message.clone(),
            }),
            None => Err(Self::missing_relation(table)),
        }
    }

    fn backend_name(&self) -> &'static str {
        "Recording"
    }
}
