//! Cache manifest handler

use axum::{extract::State, Json};

use crate::{
    domain::{
        delivery::TemplateDelivery, offline::CacheManifest,
        submissions::service::SubmissionDispatch,
    },
    infrastructure::http::state::AppState,
};

/// Get the offline cache manifest for the site's service worker
#[utoipa::path(
    get,
    operation_id = "cache_manifest",
    tag = "System",
    path = "/api/v1/cache-manifest",
    responses(
        (status = StatusCode::OK, description = "The cache manifest", body = CacheManifest),
    )
)]
pub async fn handler<D: SubmissionDispatch, W: TemplateDelivery>(
    State(state): State<AppState<D, W>>,
) -> Json<CacheManifest> {
    Json(state.manifest.as_ref().clone())
}
