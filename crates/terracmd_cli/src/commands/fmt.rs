//! Fmt command - Build a fmt invocation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use terracmd_core::command;

use super::ConfigArgs;

#[derive(Args)]
pub struct FmtArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// List files whose formatting differs
    #[arg(long, env = "PLUGIN_FMT_LIST")]
    pub list: Option<bool>,

    /// Write formatting changes to disk
    #[arg(long, env = "PLUGIN_FMT_WRITE")]
    pub write: Option<bool>,

    /// Display diffs of formatting changes
    #[arg(long, env = "PLUGIN_FMT_DIFF")]
    pub diff: Option<bool>,

    /// Check only; exit status reflects formatting
    #[arg(long, env = "PLUGIN_FMT_CHECK")]
    pub check: Option<bool>,
}

pub fn execute(args: FmtArgs) -> Result<()> {
    let mut config = args.config.resolve()?;

    if args.list.is_some() {
        config.fmt_options.list = args.list;
    }
    if args.write.is_some() {
        config.fmt_options.write = args.write;
    }
    if args.diff.is_some() {
        config.fmt_options.diff = args.diff;
    }
    if args.check.is_some() {
        config.fmt_options.check = args.check;
    }

    let invocation = command::fmt(&config);

    info!("Built fmt invocation: {}", invocation);
    println!("{}", invocation);

    Ok(())
}
