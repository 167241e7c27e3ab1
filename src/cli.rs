//! CLI argument definitions.
//!
//! Every flag is optional: running with no arguments performs the built-in
//! probe plan. Flags override the plan file, which overrides the defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, PlanFile, DEFAULT_PLAN_PATH};
use crate::output::OutputFormat;
use crate::probe::ProbePlan;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Environment:
  SUPABASE_URL    Project endpoint, e.g. https://abc.supabase.co
  SUPABASE_KEY    Project API key
  Both may be placed in a .env file in the working directory.

Examples:
  table_probe                          # Probe the default tables
  table_probe -t orders,invoices       # Probe specific tables
  table_probe --no-count-fallback -f json")]
pub struct Args {
    /// Candidate tables to probe, in order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tables: Option<Vec<String>>,

    /// Rows requested from each candidate (1-1000)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: Option<u32>,

    /// Table that gets an exact row count when it returns no rows
    #[arg(long, conflicts_with = "no_count_fallback")]
    pub count_fallback: Option<String>,

    /// Skip the diagnostic row count
    #[arg(long, default_value_t = false)]
    pub no_count_fallback: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Probe plan file (ignored if it does not exist)
    #[arg(short, long, default_value = DEFAULT_PLAN_PATH)]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Defaults, then the plan file, then command-line flags.
    pub fn resolve_plan(&self) -> Result<ProbePlan, ConfigError> {
        let mut plan = match PlanFile::load(&self.config)? {
            Some(file) => file.apply(ProbePlan::default()),
            None => ProbePlan::default(),
        };
        self.apply_overrides(&mut plan);
        Ok(plan)
    }

    fn apply_overrides(&self, plan: &mut ProbePlan) {
        if let Some(tables) = &self.tables {
            plan.probe.candidates = tables
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(limit) = self.limit {
            plan.probe.limit = limit;
        }
        if let Some(table) = &self.count_fallback {
            plan.probe.count_fallback_table = Some(table.clone());
        }
        if self.no_count_fallback {
            plan.probe.count_fallback_table = None;
        }
    }
}
