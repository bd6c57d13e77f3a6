//! File I/O for field files.

use super::PromptFields;
use crate::error::{LangGptError, Result};
use std::path::Path;

impl PromptFields {
    /// Load fields from a YAML or JSON file.
    ///
    /// Files ending in `.json` are parsed as JSON; everything else as YAML.
    /// Empty scalar values are treated as not given.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LangGptError::UserError(format!(
                "failed to read field file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let fields = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        fields.map_err(|e| match e {
            LangGptError::UserError(msg) => {
                LangGptError::UserError(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse fields from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let fields: PromptFields = serde_yaml::from_str(yaml)
            .map_err(|e| LangGptError::UserError(format!("failed to parse field YAML: {}", e)))?;
        Ok(fields.normalized())
    }

    /// Parse fields from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: PromptFields = serde_json::from_str(json)
            .map_err(|e| LangGptError::UserError(format!("failed to parse field JSON: {}", e)))?;
        Ok(fields.normalized())
    }

    pub(crate) fn normalized(mut self) -> Self {
        for scalar in [
            &mut self.role,
            &mut self.profile,
            &mut self.output_format,
            &mut self.style,
        ] {
            if scalar.as_deref().is_some_and(str::is_empty) {
                *scalar = None;
            }
        }
        self
    }
}
