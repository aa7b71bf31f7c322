//! Environment bridging for terraform input variables.

use tracing::debug;

/// Prefix terraform recognizes for input variables in the environment.
pub const TF_VAR_PREFIX: &str = "TF_VAR_";

/// Copy every `TF_VAR_` variable to a lowercased-suffix counterpart.
///
/// CI systems tend to upper-case injected variables, while terraform
/// matches `TF_VAR_name` case-sensitively against variable declarations.
/// For each `TF_VAR_SOMETHING` this sets `TF_VAR_something` to the same
/// value. Variables without the prefix are left untouched, and running
/// the copy again changes nothing.
///
/// Mutates process-wide environment state; run once at startup, before
/// anything else reads or writes the environment concurrently.
pub fn copy_tf_env() {
    let vars: Vec<(String, String)> = std::env::vars()
        .filter(|(key, _)| key.starts_with(TF_VAR_PREFIX))
        .collect();

    for (key, value) in vars {
        let suffix = &key[TF_VAR_PREFIX.len()..];
        let lowered = format!("{}{}", TF_VAR_PREFIX, suffix.to_lowercase());
        debug!("Bridging {} -> {}", key, lowered);
        std::env::set_var(lowered, value);
    }
}
