//! Select request construction.

use serde_json::Value;

/// The literal that follows `eq.` in a filter.
///
/// Everything after the operator is taken verbatim by the backend, so strings
/// are written as-is and left to the HTTP client for URL encoding. Numbers
/// and booleans are written bare.
pub fn filter_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A row filter understood by the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`
    Eq { column: String, value: Value },
}

impl Filter {
    /// Query parameter pair for this filter, e.g. `("completed", "eq.false")`.
    ///
    /// A JSON `null` becomes `is.null`, since `eq.null` never matches.
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Filter::Eq { column, value: Value::Null } => (column.clone(), "is.null".to_string()),
            Filter::Eq { column, value } => (column.clone(), format!("eq.{}", filter_literal(value))),
        }
    }
}

/// A "select limited rows" request against one table.
///
/// An empty column list selects every column.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectRequest {
    pub table: String,
    pub columns: Vec<String>,
    pub filters: Vec<Filter>,
    pub limit: Option<u32>,
}

impl SelectRequest {
    /// Select all columns from `table` with no filter and no limit.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Restrict the projection to the given columns.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Add an equality filter.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The `select=` clause: `*` or a comma-separated column list.
    pub fn select_clause(&self) -> String {
        if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns
                .iter()
                .map(|c| c.trim())
                .collect::<Vec<_>>()
                .join(",")
        }
    }

    /// All query parameters in the order they are sent.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select_clause())];
        pairs.extend(self.filters.iter().map(Filter::to_query_pair));
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}
