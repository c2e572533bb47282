//! Prompt preview command.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct PromptArgs {
    /// Product category
    #[arg(default_value = lens_core::DEFAULT_CATEGORY)]
    pub category: String,
}

pub fn execute(args: PromptArgs) -> Result<()> {
    let category = lens_core::normalize_category(Some(&args.category));
    println!("{}", lens_core::prompt::build_prompt(category));
    Ok(())
}
