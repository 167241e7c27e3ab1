//! Integration tests against a real PostgREST endpoint.
//!
//! These tests send requests to the project named by `SUPABASE_URL` and
//! `SUPABASE_KEY` (read from the environment or a `.env` file).
//! Run with: cargo test --features live-tests
//!
//! Prerequisites:
//! 1. A reachable Supabase (or plain PostgREST) project
//! 2. A key allowed to read the tables under test

#![cfg(feature = "live-tests")]

use std::error::Error;

use table_probe::db::{ClientConfig, DataClient, DbError, SelectRequest};
use table_probe::output::{OutputFormat, Outputable};
use table_probe::probe::{CandidateProbe, Execute, ProbePlan};
use table_probe::types::ProbeOutcome;

/// Table name that no real project should have.
const MISSING_TABLE: &str = "table_probe_missing_relation";

fn live_client() -> Result<Box<dyn DataClient>, Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = ClientConfig::from_env()?;
    Ok(config.connect()?)
}

#[test]
fn test_missing_table_is_status_error() -> Result<(), Box<dyn Error>> {
    let client = live_client()?;
    let result = client.select(&SelectRequest::new(MISSING_TABLE).limit(1));

    match result {
        Err(DbError::Status { status, .. }) => assert!(status >= 400),
        other => panic!("expected a status error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_probe_records_missing_table_as_failure() -> Result<(), Box<dyn Error>> {
    let client = live_client()?;
    let probe = CandidateProbe {
        candidates: vec![MISSING_TABLE.to_string()],
        limit: 1,
        count_fallback_table: None,
    };

    let summary = probe.execute(client.as_ref());

    assert_eq!(summary.attempts.len(), 1);
    assert!(matches!(
        summary.attempts[0].outcome,
        ProbeOutcome::Failed { .. }
    ));
    assert!(summary.matched_table().is_none());
    Ok(())
}

#[test]
fn test_default_plan_runs_to_completion() -> Result<(), Box<dyn Error>> {
    let client = live_client()?;
    let report = ProbePlan::default().execute(client.as_ref());

    let text = report.to_table();
    assert!(text.starts_with("=== Querying Supabase Table ==="));
    assert!(text.contains("=== Filtered Queries ==="));

    let json: serde_json::Value = serde_json::from_str(&report.format(OutputFormat::Json))?;
    assert!(json["probe"]["attempts"].is_array());
    Ok(())
}
