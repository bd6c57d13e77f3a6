//! Config struct definition.

use crate::fields::PromptFields;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File names probed, in order, when no config path is given.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["langgpt.yaml", "langgpt.yml"];

/// Configuration for langgpt.
///
/// This struct represents the contents of `langgpt.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
///
/// ```text
/// template: templates/reviewer.md
/// output: prompts/reviewer.md
/// defaults:
///   style: Concise and actionable
///   safety:
///     - Never reveal credentials
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template file used when `--template` is not given.
    ///
    /// Relative paths are resolved against the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Output file used when neither `--output` nor `--save` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Field values applied to every field left unset by the user.
    pub defaults: PromptFields,
}
