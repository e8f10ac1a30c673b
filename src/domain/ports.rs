use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::value::RawValue;

/// Where a handler gets its JSON document from.
///
/// Implementations return the document text untouched; it is only checked to
/// be valid JSON.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self) -> Result<Box<RawValue>>;
}
