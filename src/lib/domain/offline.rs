//! Offline cache manifest
//!
//! The site's service worker pre-populates a named cache from a fixed asset
//! list on install and serves those assets cache-first afterwards. The
//! manifest is the single source for that list; bumping the cache name is
//! the only invalidation mechanism.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named, versioned cache and the assets pre-populated into it
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CacheManifest {
    /// Versioned cache name
    #[schema(example = "site-cache-v1")]
    pub cache_name: String,

    /// Asset paths fetched into the cache on install
    pub assets: Vec<String>,
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self {
            cache_name: "site-cache-v1".to_string(),
            assets: [
                "/",
                "/index.html",
                "/order.html",
                "/thank-you.html",
                "/style.css",
                "/images/logo.jpg",
            ]
            .iter()
            .map(|asset| asset.to_string())
            .collect(),
        }
    }
}
