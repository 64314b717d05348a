//! Application state module

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{
    catalog::ServiceCatalog, delivery::TemplateDelivery, offline::CacheManifest,
    submissions::service::SubmissionDispatch,
};

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory the static site is served from
    pub static_dir: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<D: SubmissionDispatch, W: TemplateDelivery> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// The application configuration
    pub config: AppConfig,

    /// Immutable catalog of offered services
    pub catalog: Arc<ServiceCatalog>,

    /// Cache manifest served to the site's service worker
    pub manifest: Arc<CacheManifest>,

    /// Submission dispatch service
    pub dispatch: Arc<D>,

    /// Hosted template delivery client, when configured
    pub delivery: Option<Arc<W>>,
}

impl<D, W> AppState<D, W>
where
    D: SubmissionDispatch,
    W: TemplateDelivery,
{
    /// Create a new application state
    pub fn new(config: AppConfig, dispatch: D, delivery: Option<W>) -> Self {
        Self {
            start_time: Utc::now(),
            config,
            catalog: Arc::new(ServiceCatalog::default()),
            manifest: Arc::new(CacheManifest::default()),
            dispatch: Arc::new(dispatch),
            delivery: delivery.map(Arc::new),
        }
    }
}

impl<D, W> fmt::Debug for AppState<D, W>
where
    D: SubmissionDispatch,
    W: TemplateDelivery,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("config", &self.config)
            .field("dispatch", &"SubmissionDispatch")
            .field("delivery", &self.delivery.is_some())
            .finish()
    }
}

#[cfg(test)]
use crate::domain::{delivery::MockTemplateDelivery, submissions::service::MockSubmissionDispatch};

#[cfg(test)]
pub fn test_state(
    dispatch: Option<MockSubmissionDispatch>,
    delivery: Option<MockTemplateDelivery>,
) -> AppState<MockSubmissionDispatch, MockTemplateDelivery> {
    let dispatch = dispatch
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockSubmissionDispatch::new()));

    AppState {
        start_time: Utc::now(),
        config: AppConfig {
            static_dir: "public".to_string(),
        },
        catalog: Arc::new(ServiceCatalog::default()),
        manifest: Arc::new(CacheManifest::default()),
        dispatch,
        delivery: delivery.map(Arc::new),
    }
}
