//! Service catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    domain::{
        catalog::ServiceDetails, delivery::TemplateDelivery,
        submissions::service::SubmissionDispatch,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// List the offered services
#[utoipa::path(
    get,
    operation_id = "list_services",
    tag = "Services",
    path = "/api/v1/services",
    responses(
        (status = StatusCode::OK, description = "The service catalog", body = Vec<ServiceDetails>),
    )
)]
pub async fn list<D: SubmissionDispatch, W: TemplateDelivery>(
    State(state): State<AppState<D, W>>,
) -> Json<Vec<ServiceDetails>> {
    Json(state.catalog.services().to_vec())
}

/// Get the details for one service
#[utoipa::path(
    get,
    operation_id = "get_service",
    tag = "Services",
    path = "/api/v1/services/{id}",
    params(
        ("id" = String, Path, description = "Service identifier"),
    ),
    responses(
        (status = StatusCode::OK, description = "Service details", body = ServiceDetails),
        (status = StatusCode::NOT_FOUND, description = "Unknown service", body = ErrorResponse),
    )
)]
pub async fn get_by_id<D: SubmissionDispatch, W: TemplateDelivery>(
    State(state): State<AppState<D, W>>,
    Path(id): Path<String>,
) -> Result<Json<ServiceDetails>, ApiError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::new_404(&format!("Service \"{id}\" not found")))
}
