use crate::adapters::http::HttpBulkClient;
use crate::adapters::storage::LocalSeedFile;
use crate::config::settings::SeedSettings;
use crate::core::seeder::{PlannedPost, Seeder};
use crate::domain::model::{SeedDocument, SeedReport};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Validates the settings, loads the seed file and builds the client. Any
/// failure here happens before a request is sent.
async fn prepare(settings: &SeedSettings) -> Result<(Seeder<HttpBulkClient>, SeedDocument)> {
    settings.validate()?;

    let document = LocalSeedFile::new(&settings.seed_file).load().await?;
    tracing::info!(
        "📁 Loaded {} records from {}",
        document.total_records(),
        settings.seed_file
    );

    let client = HttpBulkClient::new(
        &settings.base_url,
        settings.api_key.as_deref(),
        settings.timeout(),
    )?;
    tracing::debug!(
        "🔑 X-API-KEY header {}",
        if settings.api_key.is_some() { "enabled" } else { "disabled" }
    );

    Ok((Seeder::new(client), document))
}

/// One full seeding run against `settings.base_url`.
pub async fn seed(settings: &SeedSettings) -> Result<SeedReport> {
    let (seeder, document) = prepare(settings).await?;
    tracing::info!("🚀 Seeding {}", settings.base_url);
    seeder.run(&document).await
}

pub async fn plan(settings: &SeedSettings) -> Result<Vec<PlannedPost>> {
    let (seeder, document) = prepare(settings).await?;
    tracing::info!("🔍 Dry run, nothing will be sent to {}", settings.base_url);
    Ok(seeder.plan(&document))
}
