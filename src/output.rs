//! Output sink for rendered prompts.
//!
//! The rendered document goes either to a file (UTF-8, overwriting any
//! existing file) or to stdout. Status lines go to a separate stream so
//! stdout carries only the document.

use crate::error::{LangGptError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Banner printed before the document in interactive mode.
pub const RESULT_BANNER: &str = "===== Result =====";

/// Where the rendered prompt goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// Pick the sink: the first path given wins, otherwise stdout.
    pub fn resolve(cli_path: Option<&Path>, config_path: Option<&Path>) -> Self {
        match cli_path.or(config_path) {
            Some(path) => Output::File(path.to_path_buf()),
            None => Output::Stdout,
        }
    }

    /// Emit the rendered content.
    ///
    /// # Arguments
    ///
    /// * `content` - The rendered document
    /// * `stdout` - Destination for the document when printing
    /// * `status` - Destination for status lines (`Saved to: ...`)
    /// * `banner` - Print [`RESULT_BANNER`] before printed content
    pub fn emit<O: Write, S: Write>(
        &self,
        content: &str,
        stdout: &mut O,
        status: &mut S,
        banner: bool,
    ) -> Result<()> {
        match self {
            Output::File(path) => {
                write_file(path, content)?;
                writeln!(status, "Saved to: {}", path.display()).map_err(io_err)?;
            }
            Output::Stdout => {
                if banner {
                    writeln!(stdout, "\n{}\n", RESULT_BANNER).map_err(io_err)?;
                }
                writeln!(stdout, "{}", content).map_err(io_err)?;
                stdout.flush().map_err(io_err)?;
            }
        }
        Ok(())
    }
}

/// Write `content` to `path`, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            LangGptError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, content).map_err(|e| {
        LangGptError::Io(format!(
            "failed to write output file '{}': {}",
            path.display(),
            e
        ))
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote rendered prompt");
    Ok(())
}

fn io_err(e: std::io::Error) -> LangGptError {
    LangGptError::Io(format!("failed to write output: {}", e))
}
