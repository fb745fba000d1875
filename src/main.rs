use clap::Parser;
use geo_seed::core::runner;
use geo_seed::utils::logger;
use geo_seed::{CliConfig, SeedError};

fn exit_with(e: &SeedError) -> ! {
    tracing::error!(
        "❌ Seeding failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting geo-seed");

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Settings: {:?}", settings);

    if settings.dry_run {
        let planned = runner::plan(&settings).await.unwrap_or_else(|e| exit_with(&e));
        tracing::info!("🔍 Dry run complete: {} categories would be posted", planned.len());
        return Ok(());
    }

    let report = runner::seed(&settings).await.unwrap_or_else(|e| exit_with(&e));
    tracing::debug!("Report: {:?}", report);

    Ok(())
}
