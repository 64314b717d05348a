//! Hosted template delivery client
//!
//! Sends a submission through the hosted email-widget API: a single JSON
//! POST naming a service/template pair, authenticated by the account's
//! public key, with the normalized submission as template parameters.

use async_trait::async_trait;
use clap::Parser;
use reqwest::Url;
use serde_json::json;
use tracing::warn;

use crate::domain::{
    delivery::{DeliveryError, TemplateDelivery},
    submissions::record::SubmissionRecord,
};

/// Template delivery configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct WidgetConfig {
    /// The delivery API endpoint
    #[clap(
        long,
        env = "WIDGET_ENDPOINT",
        default_value = "https://api.emailjs.com/api/v1.0/email/send"
    )]
    pub endpoint: String,

    /// The delivery service identifier
    #[clap(long, env = "WIDGET_SERVICE_ID", default_value = "")]
    pub service_id: String,

    /// The template identifier
    #[clap(long, env = "WIDGET_TEMPLATE_ID", default_value = "")]
    pub template_id: String,

    /// The account's public key
    #[clap(long, env = "WIDGET_PUBLIC_KEY", default_value = "")]
    pub public_key: String,
}

/// Template delivery client for the hosted widget API
#[derive(Debug, Clone)]
pub struct WidgetClient {
    config: WidgetConfig,
    client: reqwest::Client,
}

impl WidgetClient {
    /// Create a new client, validating the configuration.
    ///
    /// Returns [`DeliveryError::NotConfigured`] when the endpoint does not
    /// parse or any identifier is missing, so a broken configuration is
    /// visible at startup instead of silently dropping submissions.
    pub fn new(config: WidgetConfig) -> Result<Self, DeliveryError> {
        if config.service_id.is_empty()
            || config.template_id.is_empty()
            || config.public_key.is_empty()
        {
            return Err(DeliveryError::NotConfigured);
        }

        Url::parse(&config.endpoint).map_err(|_| DeliveryError::NotConfigured)?;

        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    fn payload(&self, record: &SubmissionRecord) -> serde_json::Value {
        json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "name": record.name,
                "email": record.email.to_string(),
                "phone": record.phone_display(),
                "message": record.message,
                "item_name": record.item_name,
            }
        })
    }
}

#[async_trait]
impl TemplateDelivery for WidgetClient {
    async fn deliver(&self, record: &SubmissionRecord) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.payload(record))
            .send()
            .await
            .map_err(|e| DeliveryError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();

            warn!(status, %body, "template delivery rejected");

            return Err(DeliveryError::Rejected { status });
        }

        Ok(())
    }
}
