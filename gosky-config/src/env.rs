// Environment variable loading

use crate::{ConfigError, Result};
use std::env;

/// Reads `PREFIX_KEY` style environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    /// Create a loader; keys are looked up as `{prefix}_{KEY}`.
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load variables from a `.env` file into the process environment first.
    ///
    /// A missing default `.env` file is not an error; an explicit path that
    /// cannot be read is.
    pub fn with_dotenv(self, path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        Ok(self)
    }

    /// Full variable name for `key`.
    pub fn key_for(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a single variable.
    pub fn load_var(&self, key: &str) -> Result<String> {
        let name = self.key_for(key);
        env::var(&name).map_err(|e| match e {
            env::VarError::NotPresent => ConfigError::KeyNotFound(name),
            other => ConfigError::EnvError(other),
        })
    }

    /// Load a variable, treating unset and blank as absent.
    pub fn load_opt(&self, key: &str) -> Option<String> {
        self.load_var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Load with default value.
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_opt(key).unwrap_or_else(|| default.to_string())
    }

    /// Load a comma separated list. Empty items are dropped.
    pub fn load_list(&self, key: &str) -> Option<Vec<String>> {
        self.load_opt(key).map(|raw| split_list(&raw))
    }
}

/// Split `"tr, en,,de"` into `["tr", "en", "de"]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
