//! Output formatting for probe results.

use crate::db::RecordExt;
use crate::output::Outputable;
use crate::types::{
    CountCheck, FilteredOutcome, FilteredQueryReport, ProbeOutcome, ProbeReport, ProbeSummary,
    TableAttempt,
};

const PROBE_HEADER: &str = "=== Querying Supabase Table ===";
const QUERIES_HEADER: &str = "=== Filtered Queries ===";

const NO_MATCH_HINTS: [&str; 4] = [
    "No candidate table returned data. Make sure to:",
    "1. Update SUPABASE_URL and SUPABASE_KEY in your .env file",
    "2. Ensure your Supabase project has at least one table with data",
    "3. Check that your table names match what's in your database",
];

fn count_line(table: &str, check: &CountCheck) -> String {
    match check {
        CountCheck::Counted { total: 0 } => {
            format!("  Row count for {}: 0 (table is empty)", table)
        }
        CountCheck::Counted { total } => format!(
            "  Row count for {}: {} (rows exist but none are visible; check row-level security policies)",
            table, total
        ),
        CountCheck::Failed { message } => {
            format!("  Count query for {} failed: {}", table, message)
        }
    }
}

fn attempt_lines(attempt: &TableAttempt) -> Vec<String> {
    let table = &attempt.table;
    let mut lines = vec![format!("--- Querying table: {} ---", table)];

    match &attempt.outcome {
        ProbeOutcome::Found { records } => {
            lines.push(format!("Found {} records in {}:", records.len(), table));
            for (i, record) in records.iter().enumerate() {
                lines.push(format!("  Record {}: {}", i + 1, record.to_compact_string()));
            }
        }
        ProbeOutcome::Empty { count_check } => {
            lines.push(format!("  No data found in {}", table));
            if let Some(check) = count_check {
                lines.push(count_line(table, check));
            }
        }
        ProbeOutcome::Failed { message } => {
            lines.push(format!("  Error querying {}: {}", table, message));
        }
    }

    lines
}

impl Outputable for ProbeSummary {
    fn to_table(&self) -> String {
        let mut lines = vec![PROBE_HEADER.to_string()];

        for attempt in &self.attempts {
            lines.push(String::new());
            lines.extend(attempt_lines(attempt));
        }

        if self.matched_table().is_none() {
            lines.push(String::new());
            lines.extend(NO_MATCH_HINTS.iter().map(|s| s.to_string()));
        }

        lines.join("\n")
    }
}

impl Outputable for FilteredQueryReport {
    fn to_table(&self) -> String {
        match &self.outcome {
            FilteredOutcome::Rows { records } => {
                let mut lines = vec![format!("{}:", self.heading)];
                for record in records {
                    lines.push(format!(
                        "  - {} (ID: {})",
                        record.get_display_or(&self.title_field, "No title"),
                        record.get_display_or(&self.id_field, "unknown"),
                    ));
                }
                lines.join("\n")
            }
            FilteredOutcome::Empty => self.empty_message.clone(),
            FilteredOutcome::Failed { message } => {
                format!("Query on {} failed: {}", self.table, message)
            }
        }
    }
}

impl Outputable for ProbeReport {
    fn to_table(&self) -> String {
        let mut sections = vec![self.probe.to_table()];

        if !self.queries.is_empty() {
            let mut lines = vec![QUERIES_HEADER.to_string()];
            lines.extend(self.queries.iter().map(|q| q.to_table()));
            sections.push(lines.join("\n"));
        }

        sections.join("\n\n")
    }
}
