pub mod http;
pub mod traits;

pub use http::{HttpListingSource, DEFAULT_ENDPOINT};
pub use traits::ListingSource;

use crate::models::Property;
use anyhow::{Context, Result};
use tokio::task::JoinHandle;

/// An in-flight fetch of the property collection.
///
/// The fetch runs on the runtime independently of the view that started it;
/// aborting discards the result, so a torn-down view never observes a late
/// response.
pub struct FetchTask {
    handle: JoinHandle<Result<Vec<Property>>>,
}

impl FetchTask {
    /// Spawn the one fetch a session performs
    pub fn spawn<S>(source: S) -> Self
    where
        S: ListingSource + 'static,
    {
        let handle = tokio::spawn(async move { source.fetch_all().await });
        Self { handle }
    }

    /// Abort the in-flight fetch and discard its result
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the collection; a cancelled fetch surfaces as an error
    pub async fn join(self) -> Result<Vec<Property>> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => anyhow::bail!("Property fetch was cancelled"),
            Err(err) => Err(err).context("Property fetch task failed"),
        }
    }
}
