use crate::domain::model::{
    Category, CategoryReport, PostOutcome, ResponseBody, SeedDocument, SeedReport,
};
use crate::domain::ports::BulkSink;
use crate::utils::error::{Result, SeedError};
use serde_json::Value;

/// 207 is a batch that partly succeeded; individual records are not inspected.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 207];

pub fn is_success_status(status: u16) -> bool {
    SUCCESS_STATUSES.contains(&status)
}

/// What a dry run reports for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPost {
    pub category: Category,
    pub url: String,
    pub records: usize,
}

pub struct Seeder<S: BulkSink> {
    sink: S,
}

impl<S: BulkSink> Seeder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Posts one category. Empty lists are skipped without a request.
    pub async fn post_bulk(&self, category: Category, records: &[Value]) -> Result<PostOutcome> {
        let path = category.bulk_path();

        if records.is_empty() {
            tracing::info!("⏭️ {}: no items, skipping", category);
            println!("Skip {}: no items", path);
            return Ok(PostOutcome::Skipped);
        }

        tracing::info!("📤 Posting {} {} records", records.len(), category);
        let response = self.sink.send(path, records).await?;

        if !is_success_status(response.status) {
            tracing::error!("❌ {}: backend returned {}", path, response.status);
            return Err(SeedError::UnexpectedStatus {
                url: response.url,
                status: response.status,
                body: response.body,
            });
        }

        let body = ResponseBody::from_text(response.body);
        println!("{}: status={}", path, response.status);
        println!("{}", body.render());

        Ok(PostOutcome::Posted {
            status: response.status,
            records: records.len(),
            body,
        })
    }

    /// Posts countries, states and cities in that order. The first failure
    /// stops the run; nothing already sent is undone.
    pub async fn run(&self, document: &SeedDocument) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        for category in Category::ALL {
            let outcome = self.post_bulk(category, document.records(category)).await?;
            report.categories.push(CategoryReport { category, outcome });
        }

        tracing::info!(
            "✅ Seeding finished: {} posted, {} skipped",
            report.posted_count(),
            report.skipped_count()
        );
        println!("Done seeding.");

        Ok(report)
    }

    /// Prints and returns what `run` would send, without sending it.
    pub fn plan(&self, document: &SeedDocument) -> Vec<PlannedPost> {
        let mut planned = Vec::new();

        for category in Category::ALL {
            let records = document.records(category);
            let path = category.bulk_path();

            if records.is_empty() {
                println!("Skip {}: no items", path);
                continue;
            }

            let url = self.sink.endpoint(path);
            println!("{}: would post {} records to {}", path, records.len(), url);
            planned.push(PlannedPost {
                category,
                url,
                records: records.len(),
            });
        }

        planned
    }
}
