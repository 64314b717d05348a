//! Per-peer rate limiting for the public form endpoints

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_governor::GovernorError;

use super::errors::ApiError;

/// Rate limit configuration
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct RateLimitConfig {
    /// The number of requests allowed per second, per peer
    #[arg(long, env = "RATE_LIMIT_PER_SECOND", default_value = "5")]
    pub per_second: u64,

    /// The number of requests allowed in a burst
    #[arg(long, env = "RATE_LIMIT_BURST", default_value = "20")]
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 5,
            burst_size: 20,
        }
    }
}

/// Body returned when a peer is over the limit
#[derive(Debug, Serialize, Deserialize)]
pub struct TooManyRequestsResponse {
    /// Seconds until the next request will be accepted
    pub retry_after: u64,
}

/// Rate limit error handler
pub fn rate_limit_error_handler(err: GovernorError) -> Response<Body> {
    match err {
        GovernorError::TooManyRequests { wait_time, .. } => {
            let body = json!(TooManyRequestsResponse {
                retry_after: wait_time
            })
            .to_string();
            Response::builder()
                .status(StatusCode::TOO_MANY_REQUESTS)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap()
        }
        _ => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .into_response(),
    }
}
