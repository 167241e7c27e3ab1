//! Probe plan file handling.
//!
//! This module provides loading and parsing of the optional
//! `.table_probe.json` file, which overrides the built-in candidate list,
//! probe limit, count fallback table and fixed filtered queries.
//!
//! Connection settings are not read from this file; see `db::ClientConfig`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::probe::{FilteredQuery, ProbePlan};

/// Default location of the plan file, relative to the working directory.
pub const DEFAULT_PLAN_PATH: &str = ".table_probe.json";

/// Configuration errors. All of these abort the run before any query.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing {name}: set it in the environment or in your .env file")]
    MissingVar { name: &'static str },

    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to read {}: {message}", .path.display())]
    PlanRead { path: PathBuf, message: String },

    #[error("Invalid JSON in {}: {message}", .path.display())]
    PlanParse { path: PathBuf, message: String },
}

/// Plan file structure. Every field is optional; absent fields keep the
/// built-in defaults.
///
/// ```json
/// {
///   "candidates": ["todos", "users"],
///   "probe_limit": 3,
///   "count_fallback_table": "todos",
///   "queries": [
///     {
///       "heading": "Incomplete todos",
///       "empty_message": "No incomplete todos found",
///       "table": "todos",
///       "columns": ["id", "title", "completed"],
///       "filter": { "column": "completed", "value": false },
///       "limit": 5
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    #[serde(default)]
    pub candidates: Option<Vec<String>>,
    #[serde(default)]
    pub probe_limit: Option<u32>,
    /// `null` disables the count fallback; absent keeps the default table.
    #[serde(default, with = "explicit_null")]
    pub count_fallback_table: Option<Option<String>>,
    #[serde(default)]
    pub queries: Option<Vec<FilteredQuery>>,
}

/// Distinguishes an absent field from an explicit `null`.
mod explicit_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }

    pub fn serialize<S>(value: &Option<Option<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }
}

impl PlanFile {
    /// Load a plan file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The JSON is invalid or has unknown fields
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::PlanRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let plan: PlanFile = serde_json::from_str(&content).map_err(|e| ConfigError::PlanParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Some(plan))
    }

    /// Overlay the fields present in this file onto `plan`.
    pub fn apply(self, mut plan: ProbePlan) -> ProbePlan {
        if let Some(candidates) = self.candidates {
            plan.probe.candidates = candidates;
        }
        if let Some(limit) = self.probe_limit {
            plan.probe.limit = limit;
        }
        if let Some(table) = self.count_fallback_table {
            plan.probe.count_fallback_table = table;
        }
        if let Some(queries) = self.queries {
            plan.queries = queries;
        }
        plan
    }
}
