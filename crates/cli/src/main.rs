use clap::Parser;

use stockdesk_cli::{Cli, run};
use stockdesk_infra::{Catalog, Settings, TracingNotificationSink, seed};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(format) = cli.log_format {
        settings.log_format = format;
    }
    stockdesk_observability::init_with(settings.log_format);

    let catalog = Catalog::from_snapshot(seed::demo_snapshot(), settings.tax_rate, TracingNotificationSink)?;
    tracing::info!(company = %settings.company_name, "catalog ready");

    let output = run(&cli.command, cli.json, &settings, &catalog.snapshot())?;
    println!("{output}");
    Ok(())
}
