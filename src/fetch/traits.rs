use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for listing sources
/// This allows swapping the HTTP store for an in-memory one in tests
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the full property collection from the source
    async fn fetch_all(&self) -> Result<Vec<Property>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
