//! # terracmd_core
//!
//! Terraform invocation building for terracmd.
//!
//! This crate translates a structured [`Config`] into the exact argument
//! sequences terraform expects, one builder per sub-command, plus the
//! `TF_VAR_` environment bridge CI systems need before a run.
//!
//! ## Features
//!
//! - Deterministic argument lists: the same configuration always
//!   produces byte-identical output
//! - Builders for apply, destroy, plan, import and fmt, each with the
//!   tool's own flag grammar
//! - Tri-state flag options (unset / true / false) where an unset
//!   option emits nothing
//! - YAML and JSON configuration descriptors
//!
//! ## Example
//!
//! ```rust
//! use terracmd_core::{command, Config};
//!
//! let config = Config::new()
//!     .parallelism(5)
//!     .var("region", "eu-west-1");
//!
//! let invocation = command::plan(&config, false);
//! assert_eq!(invocation.program, "terraform");
//! assert_eq!(
//!     invocation.args,
//!     vec!["plan", "-out=plan.tfout", "-var", "region=eu-west-1"]
//! );
//! ```

pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod invocation;

pub use command::PLAN_FILE;
pub use config::{Config, FmtOptions, InitOptions};
pub use env::{copy_tf_env, TF_VAR_PREFIX};
pub use error::{ConfigError, ConfigResult};
pub use invocation::{Invocation, TERRAFORM_BIN};
