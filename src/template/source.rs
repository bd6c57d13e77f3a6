//! Template source resolution and loading.

use crate::error::{LangGptError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The LangGPT role template compiled into the binary.
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/langgpt.md");

/// Where the template text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The built-in LangGPT template.
    Builtin,
    /// A template file on disk.
    File(PathBuf),
}

impl TemplateSource {
    /// Pick the template source.
    ///
    /// An explicit CLI path wins over the config file's `template` entry;
    /// with neither, the built-in template is used.
    pub fn resolve(cli_path: Option<&Path>, config_path: Option<&Path>) -> Self {
        match cli_path.or(config_path) {
            Some(path) => TemplateSource::File(path.to_path_buf()),
            None => TemplateSource::Builtin,
        }
    }

    /// Load the template text.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The template text
    /// * `Err(LangGptError::TemplateNotFound)` - The template file does not exist
    /// * `Err(LangGptError::Io)` - The template file exists but could not be read
    pub fn load(&self) -> Result<String> {
        match self {
            TemplateSource::Builtin => Ok(BUILTIN_TEMPLATE.to_string()),
            TemplateSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    LangGptError::TemplateNotFound(path.clone())
                } else {
                    LangGptError::Io(format!(
                        "failed to read template file '{}': {}",
                        path.display(),
                        e
                    ))
                }
            }),
        }
    }

    /// Human-readable description for logs.
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Builtin => "built-in template".to_string(),
            TemplateSource::File(path) => path.display().to_string(),
        }
    }
}
