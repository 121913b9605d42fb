// Configuration file loaders

use crate::{ConfigError, Result, Validate};
use gosky_log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Configuration file loader
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Pick the format from the file extension.
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Read and parse a file into a JSON value.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path)?;

        self.parse(&content)
    }

    /// Parse configuration text.
    pub fn parse(&self, content: &str) -> Result<Value> {
        match self.format {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e))),
            FileFormat::Toml => {
                let toml_value: toml::Value = toml::from_str(content)
                    .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

                serde_json::to_value(toml_value).map_err(|e| {
                    ConfigError::ParseError(format!("TOML to JSON conversion error: {}", e))
                })
            }
        }
    }

    /// Parse text straight into a validated settings struct.
    pub fn parse_validated<T: DeserializeOwned + Validate>(&self, content: &str) -> Result<T> {
        let value = self.parse(content)?;
        from_value_validated(value)
    }

    /// Read a file straight into a validated settings struct.
    pub fn load_validated<T: DeserializeOwned + Validate>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<T> {
        let value = self.load_file(path)?;
        from_value_validated(value)
    }
}

fn from_value_validated<T: DeserializeOwned + Validate>(value: Value) -> Result<T> {
    let settings: T = serde_json::from_value(value)
        .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}
