use crate::core::{CatalogEntry, CatalogSource};
use crate::utils::error::{Result, WallsError};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://unsplash.it/list";

/// Catalog fetched with a single unauthenticated GET. No retries.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoint: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        tracing::debug!("Fetching catalog from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(WallsError::UnexpectedStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let entries: Vec<CatalogEntry> = serde_json::from_slice(&body)?;

        tracing::info!("Catalog holds {} images", entries.len());
        Ok(entries)
    }
}
