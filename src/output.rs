//! Output formatting for probe results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for probe results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// A report that renders as text, JSON or toon.
///
/// Only the text rendering is written by hand; the other two come from the
/// report's `Serialize` impl. A report that fails to serialize renders as a
/// one-line error instead of empty output.
pub trait Outputable: Serialize {
    /// Plain-text report for the terminal.
    fn to_table(&self) -> String;

    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .unwrap_or_else(|e| format!("Failed to render report as JSON: {}", e)),
            OutputFormat::Toon => match serde_json::to_value(self) {
                Ok(value) => toon::encode(&value, None),
                Err(e) => format!("Failed to render report as toon: {}", e),
            },
        }
    }
}
