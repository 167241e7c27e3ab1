//! Shared result types for a probe run.

mod outcome;

pub use outcome::{
    CountCheck, FilteredOutcome, FilteredQueryReport, ProbeOutcome, ProbeReport, ProbeSummary,
    TableAttempt,
};
