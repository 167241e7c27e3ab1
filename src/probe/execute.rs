use tracing::{debug, info, warn};

use super::{CandidateProbe, Execute, FilteredQuery, ProbePlan};
use crate::db::{DataClient, SelectRequest};
use crate::types::{
    CountCheck, FilteredOutcome, FilteredQueryReport, ProbeOutcome, ProbeReport, ProbeSummary,
    TableAttempt,
};

impl CandidateProbe {
    /// Query one candidate, plus the count fallback if it applies.
    fn probe_table(&self, client: &dyn DataClient, table: &str) -> ProbeOutcome {
        let request = SelectRequest::new(table).limit(self.limit);

        match client.select(&request) {
            Ok(records) if !records.is_empty() => ProbeOutcome::Found { records },
            Ok(_) => {
                let count_check = (self.count_fallback_table.as_deref() == Some(table))
                    .then(|| check_count(client, table));
                ProbeOutcome::Empty { count_check }
            }
            Err(e) => {
                warn!(table, error = %e, "candidate query failed");
                ProbeOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Exact row count, used to tell an empty table from one hidden by policy.
fn check_count(client: &dyn DataClient, table: &str) -> CountCheck {
    match client.count(table) {
        Ok(total) => {
            debug!(table, total, "count fallback");
            CountCheck::Counted { total }
        }
        Err(e) => {
            warn!(table, error = %e, "count fallback failed");
            CountCheck::Failed {
                message: e.to_string(),
            }
        }
    }
}

impl Execute for CandidateProbe {
    type Output = ProbeSummary;

    fn execute(&self, client: &dyn DataClient) -> Self::Output {
        let mut attempts = Vec::new();

        for table in &self.candidates {
            let outcome = self.probe_table(client, table);
            let found = matches!(outcome, ProbeOutcome::Found { .. });

            attempts.push(TableAttempt {
                table: table.clone(),
                outcome,
            });

            if found {
                info!(table = %table, backend = client.backend_name(), "candidate returned rows");
                break;
            }
        }

        ProbeSummary { attempts }
    }
}

impl Execute for FilteredQuery {
    type Output = FilteredQueryReport;

    fn execute(&self, client: &dyn DataClient) -> Self::Output {
        let outcome = match client.select(&self.request()) {
            Ok(records) if records.is_empty() => FilteredOutcome::Empty,
            Ok(records) => FilteredOutcome::Rows { records },
            Err(e) => {
                warn!(table = %self.table, error = %e, "filtered query failed");
                FilteredOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        FilteredQueryReport {
            heading: self.heading.clone(),
            table: self.table.clone(),
            empty_message: self.empty_message.clone(),
            title_field: self.title_field.clone(),
            id_field: self.id_field.clone(),
            outcome,
        }
    }
}

impl Execute for ProbePlan {
    type Output = ProbeReport;

    fn execute(&self, client: &dyn DataClient) -> Self::Output {
        let probe = self.probe.execute(client);
        let queries = self.queries.iter().map(|q| q.execute(client)).collect();

        ProbeReport { probe, queries }
    }
}
