//! table_probe library - PostgREST table discovery tool
//!
//! Provides the data client, probe execution and output formatting used by
//! the `table_probe` binary.

pub mod cli;
pub mod config;
pub mod db;
pub mod logging;
pub mod output;
pub mod probe;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
