pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::settings::SeedSettings;
#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "geo-seed")]
#[command(about = "Seed a backend with countries, states and cities through its bulk endpoints")]
pub struct CliConfig {
    /// Backend base URL, e.g. https://xxxx.pythonanywhere.com
    #[arg(long, required_unless_present = "config")]
    pub base_url: Option<String>,

    /// Seed file to load [default: seed_geo.json]
    #[arg(long)]
    pub file: Option<String>,

    /// Value for the X-API-KEY header; not sent when empty
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// TOML file providing base_url, file, api_key and timeout_seconds
    #[arg(long)]
    pub config: Option<String>,

    /// Per-request timeout [default: 30]
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Show what would be posted without sending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command-line values as a config layer.
    pub fn as_layer(&self) -> TomlConfig {
        TomlConfig {
            base_url: self.base_url.clone(),
            file: self.file.clone(),
            api_key: self.api_key.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }

    /// Flags (and `API_KEY`) over the `--config` file over defaults.
    pub fn resolve(&self) -> Result<SeedSettings> {
        let file_layer = match &self.config {
            Some(path) => {
                tracing::debug!("📁 Loading config file: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let settings = SeedSettings::from_config(self.as_layer().overlay(file_layer))?;
        Ok(settings.with_dry_run(self.dry_run))
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["geo-seed"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_base_url_is_required_without_config() {
        assert!(CliConfig::try_parse_from(["geo-seed", "--file", "x.json"]).is_err());
    }

    #[test]
    fn test_flags_resolve_with_defaults() {
        let cli = parse(&["--base-url", "http://host/", "--api-key", "k"]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.base_url, "http://host");
        assert_eq!(settings.seed_file, "seed_geo.json");
        assert_eq!(settings.api_key.as_deref(), Some("k"));
        assert_eq!(settings.timeout_seconds, 30);
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_config_file_fills_gaps_and_flags_win() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "base_url = \"http://from-file\"\nfile = \"file.json\"\ntimeout_seconds = 12\n"
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&["--config", path, "--file", "flag.json", "--dry-run"]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.base_url, "http://from-file");
        assert_eq!(settings.seed_file, "flag.json");
        assert_eq!(settings.timeout_seconds, 12);
        assert!(settings.dry_run);
    }

    #[test]
    fn test_config_without_base_url_is_missing_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "file = \"seed.json\"").unwrap();
        let path = file.path().to_str().unwrap();

        let err = parse(&["--config", path]).resolve().unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::SeedError::MissingConfigError { .. }
        ));
    }
}
