use serde::Deserialize;
use url::Url;

use crate::error::{CatalogError, Result};

/// Where and how to reach the catalogue.
///
/// A plain value handed to [`CourseCatalog`](super::CourseCatalog) at
/// construction, so tests can point a client at a fixture server without
/// touching any process-wide state. Deserializes from config files with
/// every field optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalogue root, with trailing slash.
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout, seconds.
    pub timeout_secs: u64,
    /// Minimum spacing between requests, milliseconds. Zero disables the
    /// limiter.
    pub min_interval_ms: u64,
    /// Transient-failure retries performed by the transport middleware.
    pub max_retries: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://catalog.he.u-tokyo.ac.jp/".to_string(),
            user_agent: concat!("ut-course-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
            min_interval_ms: 1000,
            max_retries: 3,
        }
    }
}

impl CatalogConfig {
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            CatalogError::InvalidArgument(format!("invalid base url {:?}: {e}", self.base_url))
        })?;
        base.join(path).map_err(|e| {
            CatalogError::InvalidArgument(format!("cannot join {path:?} onto base url: {e}"))
        })
    }
}
