use crate::domain::model::BulkResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Transport for bulk-create calls. Implementations send and report; they do
/// not judge the status code.
#[async_trait]
pub trait BulkSink: Send + Sync {
    /// Absolute URL for a bulk path such as `/countries/bulk`.
    fn endpoint(&self, path: &str) -> String;

    async fn send(&self, path: &str, records: &[Value]) -> Result<BulkResponse>;
}
