use crate::utils::error::{Result, SeedError};
use serde::Deserialize;
use std::path::Path;

/// Optional `--config` file. Every key is optional so the same shape doubles
/// as a layer of command-line overrides.
///
/// ```toml
/// base_url = "https://backend.example.com"
/// file = "data/seed_geo.json"
/// api_key = "..."
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub base_url: Option<String>,
    pub file: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Values set on `self` win over values set on `lower`.
    pub fn overlay(self, lower: TomlConfig) -> TomlConfig {
        TomlConfig {
            base_url: self.base_url.or(lower.base_url),
            file: self.file.or(lower.file),
            api_key: self.api_key.or(lower.api_key),
            timeout_seconds: self.timeout_seconds.or(lower.timeout_seconds),
        }
    }
}
