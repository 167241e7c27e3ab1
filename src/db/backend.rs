//! Client trait for abstracting the remote data service.

use super::query::SelectRequest;
use super::value::Record;
use super::DbError;

/// Trait for clients that can run read-only queries against named tables.
///
/// Every call is attempted exactly once; implementations must not retry.
pub trait DataClient: Send + Sync {
    /// Run a select with projection, filters and row limit.
    fn select(&self, request: &SelectRequest) -> Result<Vec<Record>, DbError>;

    /// Exact number of rows in `table` visible to the current key.
    fn count(&self, table: &str) -> Result<u64, DbError>;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
