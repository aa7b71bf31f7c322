//! Destroy command - Build a destroy invocation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use terracmd_core::command;

use super::ConfigArgs;

#[derive(Args)]
pub struct DestroyArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn execute(args: DestroyArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let invocation = command::destroy(&config);

    info!("Built destroy invocation: {}", invocation);
    println!("{}", invocation);

    Ok(())
}
