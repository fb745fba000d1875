use crate::config::toml_config::TomlConfig;
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_SEED_FILE: &str = "seed_geo.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Fully resolved settings for one run.
#[derive(Clone, PartialEq)]
pub struct SeedSettings {
    /// Stored without trailing slashes.
    pub base_url: String,
    pub seed_file: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub dry_run: bool,
}

impl SeedSettings {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            seed_file: DEFAULT_SEED_FILE.to_string(),
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            dry_run: false,
        }
    }

    /// An empty key means no key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    pub fn with_seed_file(mut self, seed_file: impl Into<String>) -> Self {
        self.seed_file = seed_file.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds settings from a merged config layer, filling in defaults.
    pub fn from_config(config: TomlConfig) -> Result<Self> {
        let base_url = config.base_url.ok_or_else(|| SeedError::MissingConfigError {
            field: "base_url".to_string(),
        })?;

        let mut settings = SeedSettings::new(&base_url).with_api_key(config.api_key);
        if let Some(file) = config.file {
            settings = settings.with_seed_file(file);
        }
        if let Some(timeout) = config.timeout_seconds {
            settings = settings.with_timeout_seconds(timeout);
        }
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

// Hand-written so the API key never reaches the logs.
impl std::fmt::Debug for SeedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedSettings")
            .field("base_url", &self.base_url)
            .field("seed_file", &self.seed_file)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Validate for SeedSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("file", &self.seed_file)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}
