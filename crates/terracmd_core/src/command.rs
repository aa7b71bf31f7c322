//! Argument builders for the supported terraform sub-commands.
//!
//! Every builder is a pure function from a [`Config`] (plus any extra
//! arguments) to an [`Invocation`]. The same configuration always
//! produces a byte-identical argument list: var flags are emitted in
//! ascending key order, everything else in declaration order.
//!
//! The flag grammars are terraform's, preserved exactly, down to the
//! two-token `--target <v>` form apply takes versus the single-token
//! `-target=<v>` form destroy takes.

use crate::config::Config;
use crate::invocation::Invocation;

/// Plan artifact written by `plan` and consumed by `apply`.
pub const PLAN_FILE: &str = "plan.tfout";

/// Build an `apply` invocation consuming the previously written plan file.
pub fn apply(config: &Config) -> Invocation {
    let mut args = vec!["apply".to_string()];

    if config.parallelism > 0 {
        args.push(format!("-parallelism={}", config.parallelism));
    }

    for target in &config.targets {
        args.push("--target".to_string());
        args.push(target.clone());
    }

    // Variables are already baked into the plan file.
    args.push(PLAN_FILE.to_string());

    Invocation::terraform(args)
}

/// Build a `destroy` invocation.
pub fn destroy(config: &Config) -> Invocation {
    let mut args = vec!["destroy".to_string()];

    if config.parallelism > 0 {
        args.push(format!("-parallelism={}", config.parallelism));
    }

    for target in &config.targets {
        args.push(format!("-target={}", target));
    }

    push_var_flags(&mut args, config);
    push_var_file_flags(&mut args, config);

    args.push("-force".to_string());

    Invocation::terraform(args)
}

/// Build a `plan` invocation.
///
/// In destroy mode the output-file flag is suppressed and no var or
/// var-file flags are emitted, mirroring apply: a destroy run takes no
/// variable input.
pub fn plan(config: &Config, destroy: bool) -> Invocation {
    let mut args = vec!["plan".to_string()];

    if destroy {
        args.push("-destroy".to_string());
    } else {
        args.push(format!("-out={}", PLAN_FILE));
        push_var_flags(&mut args, config);
        push_var_file_flags(&mut args, config);
    }

    Invocation::terraform(args)
}

/// Build an `import` invocation for the given resource address and id.
pub fn import(config: &Config, target: &str, id: &str) -> Invocation {
    let mut args = vec!["import".to_string()];

    if let Some(lock) = config.init_options.lock {
        args.push(format!("-lock={}", lock));
    }

    if let Some(timeout) = &config.init_options.lock_timeout {
        if !timeout.is_empty() {
            args.push(format!("-lock-timeout={}", timeout));
        }
    }

    push_var_flags(&mut args, config);
    push_var_file_flags(&mut args, config);

    args.push(target.to_string());
    args.push(id.to_string());

    Invocation::terraform(args)
}

/// Build a `fmt` invocation.
///
/// Set options appear in fixed relative order: list, write, diff,
/// check. An unset option emits nothing; an explicit `false` is still
/// emitted as `-<name>=false`.
pub fn fmt(config: &Config) -> Invocation {
    let mut args = vec!["fmt".to_string()];

    let options = &config.fmt_options;
    for (name, value) in [
        ("list", options.list),
        ("write", options.write),
        ("diff", options.diff),
        ("check", options.check),
    ] {
        if let Some(value) = value {
            args.push(format!("-{}={}", name, value));
        }
    }

    Invocation::terraform(args)
}

/// Emit `-var <key>=<value>` pairs in ascending key order.
///
/// The vars map carries no iteration-order guarantee, so the sort here
/// is what makes the output reproducible.
fn push_var_flags(args: &mut Vec<String>, config: &Config) {
    let mut pairs: Vec<_> = config.vars.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    for (key, value) in pairs {
        args.push("-var".to_string());
        args.push(format!("{}={}", key, value));
    }
}

/// Emit `-var-file=<path>` flags in the order the paths were given.
fn push_var_file_flags(args: &mut Vec<String>, config: &Config) {
    for path in &config.var_files {
        args.push(format!("-var-file={}", path));
    }
}
