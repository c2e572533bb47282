//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use lens_provider::CohereClient;
use std::path::PathBuf;
use std::sync::Arc;

use super::ProviderArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path, used with --log
    #[arg(long, default_value = "marketlens.log")]
    pub log_file: PathBuf,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.provider.into_config();
    tracing::info!(?config, "Generation provider configured");
    let client = CohereClient::new(config);

    println!();
    println!("  {} {}", "Marketlens".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Dashboard".green(),
        args.host,
        args.port
    );
    println!(
        "  {}        http://{}:{}/api/market-data?type=<category>",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}      {}", "Model".green(), client.model());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    lens_web::run_server(Arc::new(client), &args.host, args.port).await?;

    Ok(())
}
