//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lens_provider::config::{
    GenerationConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS,
};
use std::time::Duration;

pub mod prompt;
pub mod report;
pub mod serve;

/// Marketlens - market analysis reports for any product category
#[derive(Parser)]
#[command(name = "marketlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Generate one report and print it as JSON
    Report(report::ReportArgs),

    /// Print the prompt sent for a category
    Prompt(prompt::PromptArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Report(args) => report::execute(args).await,
            Commands::Prompt(args) => prompt::execute(args),
        }
    }
}

/// Generation provider settings shared by commands that call the model.
#[derive(Args, Debug)]
pub struct ProviderArgs {
    /// Cohere API key
    #[arg(long, env = "COHERE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Generation model
    #[arg(long, env = "COHERE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Provider base URL
    #[arg(long, env = "COHERE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum tokens per completion
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// HTTP timeout for provider calls, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ProviderArgs {
    pub fn into_config(self) -> GenerationConfig {
        GenerationConfig {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            timeout: Duration::from_secs(self.timeout_secs),
            ..GenerationConfig::new(self.api_key)
                .with_base_url(self.base_url)
                .with_model(self.model)
        }
    }
}
