//! Plan command - Build a plan invocation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use terracmd_core::command;

use super::ConfigArgs;

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Plan a destroy run instead of writing a plan file
    #[arg(long)]
    pub destroy: bool,
}

pub fn execute(args: PlanArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let invocation = command::plan(&config, args.destroy);

    info!("Built plan invocation: {}", invocation);
    println!("{}", invocation);

    Ok(())
}
