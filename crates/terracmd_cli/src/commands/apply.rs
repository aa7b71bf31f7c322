//! Apply command - Build an apply invocation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use terracmd_core::command;

use super::ConfigArgs;

#[derive(Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn execute(args: ApplyArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let invocation = command::apply(&config);

    info!("Built apply invocation: {}", invocation);
    println!("{}", invocation);

    Ok(())
}
