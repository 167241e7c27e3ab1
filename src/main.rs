use clap::Parser;

use table_probe::cli::Args;
use table_probe::db::ClientConfig;
use table_probe::logging;
use table_probe::output::Outputable;
use table_probe::probe::Execute;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logging::init(args.verbose)?;

    let config = ClientConfig::from_env()?;
    let plan = args.resolve_plan()?;
    let client = config.connect()?;
    tracing::info!(backend = client.backend_name(), "client ready");

    let report = plan.execute(client.as_ref());
    println!("{}", report.format(args.format));
    Ok(())
}
