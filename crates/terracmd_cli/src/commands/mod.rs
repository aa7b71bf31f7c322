//! CLI command definitions.
//!
//! This module defines the command structure for the terracmd CLI.
//! Each sub-command maps to one invocation builder in terracmd_core.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use terracmd_core::Config;

pub mod apply;
pub mod destroy;
pub mod fmt;
pub mod import;
pub mod plan;

/// terracmd - deterministic terraform invocation builder
#[derive(Parser)]
#[command(name = "terracmd")]
#[command(version, about = "terracmd - deterministic terraform invocation builder")]
#[command(long_about = r#"
terracmd translates a run configuration into the exact terraform command
line for a sub-command and prints it for the surrounding runner to
execute. The same configuration always produces the same command line.

SUB-COMMANDS:
  apply    → terraform apply, consuming the written plan file
  destroy  → terraform destroy
  plan     → terraform plan (optionally a destroy plan)
  import   → terraform import of an existing resource
  fmt      → terraform fmt

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an apply invocation from the recorded plan file
    Apply(apply::ApplyArgs),

    /// Build a destroy invocation
    Destroy(destroy::DestroyArgs),

    /// Build a plan invocation
    Plan(plan::PlanArgs),

    /// Build an import invocation for an existing resource
    Import(import::ImportArgs),

    /// Build a fmt invocation
    Fmt(fmt::FmtArgs),
}

/// Configuration arguments shared by every sub-command.
///
/// A descriptor file provides the baseline; flags and their `PLUGIN_*`
/// environment counterparts override it field by field.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to a YAML or JSON configuration descriptor
    #[arg(short, long, env = "PLUGIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Limit on concurrent operations (0 = tool default)
    #[arg(long, env = "PLUGIN_PARALLELISM")]
    pub parallelism: Option<u32>,

    /// Resource address to limit the run to (repeatable)
    #[arg(long = "target", env = "PLUGIN_TARGETS", value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Input variable as key=value (repeatable)
    #[arg(long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Variable file path (repeatable)
    #[arg(long = "var-file", env = "PLUGIN_VAR_FILES", value_delimiter = ',')]
    pub var_files: Vec<String>,
}

impl ConfigArgs {
    /// Resolve the effective configuration.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(parallelism) = self.parallelism {
            config.parallelism = parallelism;
        }
        if !self.targets.is_empty() {
            config.targets = self.targets.clone();
        }
        if !self.vars.is_empty() {
            config.vars = self.vars.iter().cloned().collect();
        }
        if !self.var_files.is_empty() {
            config.var_files = self.var_files.clone();
        }

        Ok(config)
    }
}

/// Parse a `key=value` variable assignment.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}
