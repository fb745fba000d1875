use crate::domain::model::SeedDocument;
use crate::utils::error::{Result, SeedError};
use std::path::PathBuf;

/// Seed document stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalSeedFile {
    path: PathBuf,
}

impl LocalSeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<SeedDocument> {
        let display = self.path.display().to_string();
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SeedError::IoError {
                path: display.clone(),
                source,
            })?;

        parse_seed(&data).map_err(|source| SeedError::ParseError {
            path: display,
            source,
        })
    }
}

/// The top level has to be a JSON object; serde would otherwise accept a
/// three-element array as a struct.
fn parse_seed(data: &[u8]) -> std::result::Result<SeedDocument, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom(
            "seed document must be a JSON object",
        ));
    }
    serde_json::from_value(value)
}
