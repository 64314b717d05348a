use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::{delivery::TemplateDelivery, submissions::service::SubmissionDispatch},
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod cache_manifest;
pub mod services;
pub mod stoplight;
pub mod submissions;
pub mod uptime;

pub fn router<D: SubmissionDispatch, W: TemplateDelivery>() -> Router<AppState<D, W>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route("/cache-manifest", get(cache_manifest::handler))
        .route("/services", get(services::list))
        .route("/services/:id", get(services::get_by_id))
        .route("/submissions", post(submissions::handler))
}
