//! Invocation assembly for the terraform binary.

use std::process::Command;

/// Program name every invocation is bound to.
pub const TERRAFORM_BIN: &str = "terraform";

/// A ready-to-run terraform invocation.
///
/// Pure data: the program name plus an ordered argument list. Spawning,
/// output handling and exit-code interpretation belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Bind an argument list to the terraform binary.
    pub fn terraform(args: Vec<String>) -> Self {
        Self {
            program: TERRAFORM_BIN.to_string(),
            args,
        }
    }

    /// Build an unspawned [`Command`] for the process runner.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
