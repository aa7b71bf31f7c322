//! Import command - Build an import invocation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use terracmd_core::command;

use super::ConfigArgs;

#[derive(Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// State locking (true or false; omitted = tool default)
    #[arg(long, env = "PLUGIN_LOCK")]
    pub lock: Option<bool>,

    /// Lock timeout as a duration string (e.g. 30s)
    #[arg(long, env = "PLUGIN_LOCK_TIMEOUT")]
    pub lock_timeout: Option<String>,

    /// Resource address to import into
    pub target: String,

    /// Provider-specific id of the existing resource
    pub id: String,
}

pub fn execute(args: ImportArgs) -> Result<()> {
    let mut config = args.config.resolve()?;

    if args.lock.is_some() {
        config.init_options.lock = args.lock;
    }
    if args.lock_timeout.is_some() {
        config.init_options.lock_timeout = args.lock_timeout.clone();
    }

    let invocation = command::import(&config, &args.target, &args.id);

    info!("Built import invocation: {}", invocation);
    println!("{}", invocation);

    Ok(())
}
