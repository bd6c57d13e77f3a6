//! Config loading, discovery, and validation.

use super::model::{CONFIG_FILE_NAMES, Config};
use crate::error::{LangGptError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// A relative `template` path is rebased onto the directory holding the
    /// config file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LangGptError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LangGptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        if let Some(base) = path.parent() {
            config.template = config.template.map(|t| rebase(base, t));
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            LangGptError::UserError(format!("failed to parse config YAML: {}", e))
        })?;
        config.defaults = config.defaults.normalized();

        config.validate()?;
        Ok(config)
    }

    /// Find a config file in `dir`, trying each of [`CONFIG_FILE_NAMES`].
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Load the explicit config file, or the one discovered in `dir`, or
    /// fall back to defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing
    /// discovered file is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(dir) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "using discovered config file");
                    Self::load(path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `template`, when set, must not be an empty path
    /// - `output`, when set, must not be an empty path
    pub fn validate(&self) -> Result<()> {
        if self
            .template
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(LangGptError::UserError(
                "config validation failed: template must not be empty".to_string(),
            ));
        }

        if self
            .output
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(LangGptError::UserError(
                "config validation failed: output must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() && !base.as_os_str().is_empty() {
        base.join(path)
    } else {
        path
    }
}
