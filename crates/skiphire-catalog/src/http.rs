//! Pricing API client.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;
use tracing::{debug, info, warn};

use skiphire_core::{CatalogError, SkipOption, DEFAULT_AREA, DEFAULT_ENDPOINT, DEFAULT_POSTCODE};

use crate::source::{decode_catalog, CatalogSource};

/// Default HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Location the catalog is requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub endpoint: String,
    pub postcode: String,
    pub area: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            postcode: DEFAULT_POSTCODE.to_string(),
            area: DEFAULT_AREA.to_string(),
        }
    }
}

impl CatalogQuery {
    /// Full request URL with `postcode` and `area` query parameters.
    pub fn url(&self) -> Result<Url, CatalogError> {
        Url::parse_with_params(
            &self.endpoint,
            &[("postcode", &self.postcode), ("area", &self.area)],
        )
        .map_err(|e| CatalogError::Transport(format!("invalid endpoint {}: {e}", self.endpoint)))
    }
}

/// Fetches the catalog with a single GET. No retries.
pub struct HttpCatalog {
    client: Client,
    query: CatalogQuery,
}

impl HttpCatalog {
    /// Build a client with the given request timeout.
    pub fn new(query: CatalogQuery, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        Ok(Self { client, query })
    }

    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self) -> Result<Vec<SkipOption>, CatalogError> {
        let url = self.query.url()?;
        debug!(%url, "requesting skip catalog");

        let response = self
            .client
            .get(url)
            .header(
                USER_AGENT,
                concat!("skiphire/", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                warn!(error = %e, "skip catalog request failed");
                CatalogError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "skip catalog endpoint returned an error");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        let skips = decode_catalog(&body)?;
        info!(count = skips.len(), "skip catalog received");
        Ok(skips)
    }

    fn describe(&self) -> String {
        format!(
            "{} (postcode={}, area={})",
            self.query.endpoint, self.query.postcode, self.query.area
        )
    }
}
