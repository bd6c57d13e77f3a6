//! Command implementations for langgpt.
//!
//! `dispatch` binds the process streams and working directory, then hands
//! off to `generate::run`, which does the actual work against injected
//! streams so it can be driven from tests.

mod generate;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::error::{LangGptError, Result};
use std::io;

/// Dispatch the parsed CLI to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        LangGptError::Io(format!("failed to determine current directory: {}", e))
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    generate::run(&cli, &cwd, stdin.lock(), &mut stdout, &mut stderr)
}
