//! Error types for the langgpt CLI.
//!
//! Rendering itself never fails; these errors only come from the
//! collaborators around it (argument files, template files, output sinks).

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for langgpt operations.
#[derive(Error, Debug)]
pub enum LangGptError {
    /// User provided invalid arguments or an unparsable input file.
    #[error("{0}")]
    UserError(String),

    /// Reading input or writing output failed.
    #[error("I/O failure: {0}")]
    Io(String),

    /// An explicitly requested template file does not exist.
    #[error("template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
}

impl LangGptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LangGptError::UserError(_) => exit_codes::USER_ERROR,
            LangGptError::Io(_) => exit_codes::IO_FAILURE,
            LangGptError::TemplateNotFound(_) => exit_codes::TEMPLATE_NOT_FOUND,
        }
    }
}

/// Result type alias for langgpt operations.
pub type Result<T> = std::result::Result<T, LangGptError>;
