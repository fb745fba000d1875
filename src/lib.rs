pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpBulkClient, storage::LocalSeedFile};
pub use config::settings::SeedSettings;
pub use core::seeder::Seeder;
pub use domain::model::{Category, PostOutcome, SeedDocument, SeedReport};
pub use utils::error::{Result, SeedError};
