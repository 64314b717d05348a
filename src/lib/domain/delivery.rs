//! Template delivery module
//!
//! The second, independent email path: a hosted service that sends a
//! templated email from the client-facing form flow, with no relay
//! credentials involved. The server only supplies template parameters.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::mock;

use crate::domain::submissions::record::SubmissionRecord;

/// Template delivery errors
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The delivery service was never configured
    #[error("template delivery is not configured")]
    NotConfigured,

    /// The request never reached the delivery service
    #[error("delivery request failed: {0}")]
    RequestFailed(String),

    /// The delivery service rejected the send
    #[error("delivery service rejected the send with status {status}")]
    Rejected {
        /// HTTP status returned by the delivery service
        status: u16,
    },
}

/// Hosted template delivery service
#[async_trait]
pub trait TemplateDelivery: Clone + Send + Sync + 'static {
    /// Deliver a submission as template parameters to the configured
    /// service/template pair.
    async fn deliver(&self, record: &SubmissionRecord) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mock! {
    pub TemplateDelivery {}

    impl Clone for TemplateDelivery {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl TemplateDelivery for TemplateDelivery {
        async fn deliver(&self, record: &SubmissionRecord) -> Result<(), DeliveryError>;
    }
}
