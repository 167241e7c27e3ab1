//! Output formatting tests for probe results.

#[cfg(test)]
mod tests {
    use crate::test_utils::record;
    use crate::types::{
        CountCheck, FilteredOutcome, FilteredQueryReport, ProbeOutcome, ProbeReport,
        ProbeSummary, TableAttempt,
    };
    use rstest::{fixture, rstest};
    use serde_json::json;

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const FOUND_TABLE: &str = "\
=== Querying Supabase Table ===

--- Querying table: todos ---
  No data found in todos
  Row count for todos: 0 (table is empty)

--- Querying table: users ---
  Error querying users: Backend returned 401: Invalid API key

--- Querying table: posts ---
Found 2 records in posts:
  Record 1: {\"id\":1,\"title\":\"Hello\"}
  Record 2: {\"id\":2,\"title\":\"World\"}

=== Filtered Queries ===
Incomplete todos:
  - Write tests (ID: 4)
  - No title (ID: 5)";

    const NO_MATCH_TABLE: &str = "\
=== Querying Supabase Table ===

--- Querying table: todos ---
  No data found in todos
  Row count for todos: 3 (rows exist but none are visible; check row-level security policies)

No candidate table returned data. Make sure to:
1. Update SUPABASE_URL and SUPABASE_KEY in your .env file
2. Ensure your Supabase project has at least one table with data
3. Check that your table names match what's in your database

=== Filtered Queries ===
No incomplete todos found";

    const FAILED_QUERY_TABLE: &str = "Query on todos failed: Request failed: timeout";

    const COUNT_FAILED_SUMMARY: &str = "\
=== Querying Supabase Table ===

--- Querying table: todos ---
  No data found in todos
  Count query for todos failed: Backend returned 403: permission denied

No candidate table returned data. Make sure to:
1. Update SUPABASE_URL and SUPABASE_KEY in your .env file
2. Ensure your Supabase project has at least one table with data
3. Check that your table names match what's in your database";

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn query_report(outcome: FilteredOutcome) -> FilteredQueryReport {
        FilteredQueryReport {
            heading: "Incomplete todos".to_string(),
            table: "todos".to_string(),
            empty_message: "No incomplete todos found".to_string(),
            title_field: "title".to_string(),
            id_field: "id".to_string(),
            outcome,
        }
    }

    #[fixture]
    fn found_report() -> ProbeReport {
        ProbeReport {
            probe: ProbeSummary {
                attempts: vec![
                    TableAttempt {
                        table: "todos".to_string(),
                        outcome: ProbeOutcome::Empty {
                            count_check: Some(CountCheck::Counted { total: 0 }),
                        },
                    },
                    TableAttempt {
                        table: "users".to_string(),
                        outcome: ProbeOutcome::Failed {
                            message: "Backend returned 401: Invalid API key".to_string(),
                        },
                    },
                    TableAttempt {
                        table: "posts".to_string(),
                        outcome: ProbeOutcome::Found {
                            records: vec![
                                record(json!({"id": 1, "title": "Hello"})),
                                record(json!({"id": 2, "title": "World"})),
                            ],
                        },
                    },
                ],
            },
            queries: vec![query_report(FilteredOutcome::Rows {
                records: vec![
                    record(json!({"id": 4, "title": "Write tests", "completed": false})),
                    record(json!({"id": 5, "completed": false})),
                ],
            })],
        }
    }

    #[fixture]
    fn no_match_report() -> ProbeReport {
        ProbeReport {
            probe: ProbeSummary {
                attempts: vec![TableAttempt {
                    table: "todos".to_string(),
                    outcome: ProbeOutcome::Empty {
                        count_check: Some(CountCheck::Counted { total: 3 }),
                    },
                }],
            },
            queries: vec![query_report(FilteredOutcome::Empty)],
        }
    }

    #[fixture]
    fn failed_query() -> FilteredQueryReport {
        query_report(FilteredOutcome::Failed {
            message: "Request failed: timeout".to_string(),
        })
    }

    #[fixture]
    fn count_failed_summary() -> ProbeSummary {
        ProbeSummary {
            attempts: vec![TableAttempt {
                table: "todos".to_string(),
                outcome: ProbeOutcome::Empty {
                    count_check: Some(CountCheck::Failed {
                        message: "Backend returned 403: permission denied".to_string(),
                    }),
                },
            }],
        }
    }

    // =========================================================================
    // Tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_found,
        fixture: found_report,
        fixture_type: ProbeReport,
        expected: FOUND_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_no_match,
        fixture: no_match_report,
        fixture_type: ProbeReport,
        expected: NO_MATCH_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_failed_query,
        fixture: failed_query,
        fixture_type: FilteredQueryReport,
        expected: FAILED_QUERY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_count_failed,
        fixture: count_failed_summary,
        fixture_type: ProbeSummary,
        expected: COUNT_FAILED_SUMMARY,
    }

    crate::output_table_contains_test! {
        test_name: test_found_report_omits_hints,
        fixture: found_report,
        fixture_type: ProbeReport,
        contains: ["Found 2 records in posts:", "=== Filtered Queries ==="],
    }

    #[rstest]
    fn test_found_report_has_no_hint_block(found_report: ProbeReport) {
        use crate::output::Outputable;
        assert!(!found_report.to_table().contains("Make sure to"));
    }

    #[rstest]
    fn test_report_without_queries_has_no_query_section(mut found_report: ProbeReport) {
        use crate::output::Outputable;
        found_report.queries.clear();
        assert!(!found_report.to_table().contains("=== Filtered Queries ==="));
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: found_report,
        fixture_type: ProbeReport,
        assertions: {
            "/probe/attempts/0/table": json!("todos"),
            "/probe/attempts/0/outcome/status": json!("empty"),
            "/probe/attempts/0/outcome/count_check/total": json!(0),
            "/probe/attempts/1/outcome/status": json!("failed"),
            "/probe/attempts/2/outcome/records/1/title": json!("World"),
            "/queries/0/heading": json!("Incomplete todos"),
            "/queries/0/outcome/status": json!("rows"),
        },
    }

    #[rstest]
    fn test_format_json_skips_display_only_fields(failed_query: FilteredQueryReport) {
        use crate::output::{OutputFormat, Outputable};
        let parsed: serde_json::Value =
            serde_json::from_str(&failed_query.format(OutputFormat::Json)).unwrap();
        assert!(parsed.get("title_field").is_none());
        assert!(parsed.get("empty_message").is_none());
        assert_eq!(parsed["outcome"]["message"], "Request failed: timeout");
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: found_report,
        fixture_type: ProbeReport,
        contains: ["todos", "posts", "Incomplete todos"],
    }
}
