//! One-shot report command.

use anyhow::Result;
use clap::Args;
use lens_provider::CohereClient;

use super::ProviderArgs;

#[derive(Args)]
pub struct ReportArgs {
    /// Product category to analyze
    #[arg(default_value = lens_core::DEFAULT_CATEGORY)]
    pub category: String,

    /// Print compact JSON instead of pretty-printed
    #[arg(long, conflicts_with = "summary")]
    pub compact: bool,

    /// Print a human-readable summary instead of JSON
    #[arg(long)]
    pub summary: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

pub async fn execute(args: ReportArgs) -> Result<()> {
    let client = CohereClient::new(args.provider.into_config());
    let category = lens_core::normalize_category(Some(&args.category));

    let report = lens_core::generate_report(&client, category).await?;

    if args.summary {
        crate::output::print_report(category, &report);
        return Ok(());
    }

    let output = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", output);

    Ok(())
}
