use crate::fetch::traits::ListingSource;
use crate::models::{ListingsEnvelope, Property};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/v1/property";

/// HTTP listing source backed by the property store's read endpoint
pub struct HttpListingSource {
    client: Client,
    endpoint: String,
}

impl HttpListingSource {
    /// Create a source pointing at the default local endpoint
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a source pointing at a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_all(&self) -> Result<Vec<Property>> {
        info!("Fetching property collection from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("Error fetching properties")?;

        if !response.status().is_success() {
            warn!("Property endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to load properties: {}", response.status());
        }

        let envelope: ListingsEnvelope = response
            .json()
            .await
            .context("Failed to load properties")?;

        if !envelope.success {
            warn!("Property endpoint reported success: false");
            anyhow::bail!("Failed to load properties");
        }

        debug!("Received {} property documents", envelope.properties.len());

        if envelope.properties.is_empty() {
            warn!("Property collection is empty");
        }

        Ok(envelope.properties)
    }

    fn source_name(&self) -> &'static str {
        "property-store"
    }
}
