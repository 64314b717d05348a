#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! HTTP server for the order/contact submission service

use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use contact_relay::{
    domain::{
        communication::email_addresses::EmailAddress,
        submissions::service::SubmissionDispatchImpl,
    },
    infrastructure::{
        email::{
            smtp::{SmtpConfig, SmtpMailer},
            widget::{WidgetClient, WidgetConfig},
        },
        http::{
            rate_limit::RateLimitConfig,
            state::{AppConfig, AppState},
            HttpServer, HttpServerConfig,
        },
    },
};
use tracing::error;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP relay configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,

    /// The hosted template-delivery configuration
    #[clap(flatten)]
    pub widget: WidgetConfig,

    /// Rate limiting for the public endpoints
    #[clap(flatten)]
    pub rate_limit: RateLimitConfig,

    /// The operator address receiving internal alerts
    #[clap(long, env = "OPERATOR_EMAIL")]
    pub operator_email: String,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file found, using the process environment");
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let operator = EmailAddress::new(&args.operator_email)
        .map_err(|e| anyhow!("invalid OPERATOR_EMAIL: {e}"))?;

    let mailer = SmtpMailer::new(args.smtp);
    let dispatch = SubmissionDispatchImpl::new(Arc::new(mailer), operator);

    // A broken widget configuration disables the form path visibly (503)
    // instead of silently dropping submissions.
    let delivery = match WidgetClient::new(args.widget) {
        Ok(client) => Some(client),
        Err(e) => {
            error!("template delivery disabled: {e}");
            None
        }
    };

    let config = AppConfig {
        static_dir: args.server.static_dir.clone(),
    };

    let state = AppState::new(config, dispatch, delivery);

    HttpServer::new(state, args.server, args.rate_limit)
        .await?
        .run()
        .await
}
