//! HTTP client for the catalog search API
//!
//! One GET per invocation, no caching and no retries. A non-2xx status or a
//! body that does not decode is a hard failure for that invocation; the
//! caller logs it and drops the reply.

use reqwest::Client;
use tracing::{debug, info};

use crate::errors::{Error, Result};

use super::types::{DatasetRecord, PackageSearchResponse};

/// Default CKAN search endpoint of the Berlin data portal.
pub const DEFAULT_CATALOG_URL: &str =
    "https://datenregister.berlin.de/api/3/action/package_search?start=0&rows=500";

pub struct CatalogClient {
    client: Client,
    url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_CATALOG_URL.to_string())
    }

    /// Create a client against a custom endpoint (configuration override or
    /// tests).
    pub fn with_url(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Fetch the full dataset listing.
    ///
    /// # Errors
    /// `Error::Catalog` on a non-2xx response, `Error::Http` when the request
    /// fails or the body does not decode as a package_search envelope.
    pub async fn fetch_datasets(&self) -> Result<Vec<DatasetRecord>> {
        info!("Fetching dataset catalog from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Catalog(format!(
                "package_search returned HTTP {}",
                status
            )));
        }

        let envelope: PackageSearchResponse = response.json().await?;
        debug!("Catalog returned {} records", envelope.result.results.len());

        Ok(envelope.result.results)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
