//! Catalog source trait and the offline implementations.

use std::path::{Path, PathBuf};

use tracing::debug;

use skiphire_core::{CatalogError, SkipOption};

/// Anything that can produce the list of skips for the configured location.
///
/// Implementations block; callers run them off the UI thread.
pub trait CatalogSource: Send + Sync {
    /// Fetch the full, unfiltered catalog.
    fn fetch(&self) -> Result<Vec<SkipOption>, CatalogError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Parse a JSON array of skip records.
pub fn decode_catalog(body: &str) -> Result<Vec<SkipOption>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))
}

/// Reads the catalog from a JSON file shaped like the API response.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn fetch(&self) -> Result<Vec<SkipOption>, CatalogError> {
        debug!(path = %self.path.display(), "reading skip catalog file");
        let body = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::Io(format!("{}: {e}", self.path.display())))?;
        decode_catalog(&body)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fixed in-memory catalog, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    result: Result<Vec<SkipOption>, CatalogError>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(skips: Vec<SkipOption>) -> Self {
        Self { result: Ok(skips) }
    }

    /// A source whose every fetch fails with `err`.
    #[must_use]
    pub fn failing(err: CatalogError) -> Self {
        Self { result: Err(err) }
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch(&self) -> Result<Vec<SkipOption>, CatalogError> {
        self.result.clone()
    }

    fn describe(&self) -> String {
        match &self.result {
            Ok(skips) => format!("static ({} skips)", skips.len()),
            Err(_) => "static (failing)".to_string(),
        }
    }
}
