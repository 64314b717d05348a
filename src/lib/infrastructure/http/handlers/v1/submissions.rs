//! Submission dispatch handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{
        delivery::TemplateDelivery,
        submissions::{record::SubmissionRecord, service::SubmissionDispatch},
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Submission request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionBody {
    /// The submitter's name
    #[schema(example = "Ada Lovelace")]
    name: String,

    /// The submitter's email address
    #[schema(example = "ada@example.com")]
    email: String,

    /// Optional phone number
    #[schema(example = "+254 700 000000")]
    phone: Option<String>,

    /// Free-text message
    #[schema(example = "I would like a quote.")]
    message: Option<String>,

    /// The service or plan the submission concerns
    #[schema(example = "web-development")]
    item_name: Option<String>,
}

impl TryFrom<SubmissionBody> for SubmissionRecord {
    type Error = ApiError;

    fn try_from(body: SubmissionBody) -> Result<Self, Self::Error> {
        Ok(SubmissionRecord::new(
            &body.name,
            &body.email,
            body.phone,
            body.message,
            body.item_name,
        )?)
    }
}

/// Submission response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    /// Confirmation message
    #[schema(example = "Emails sent successfully")]
    message: String,
}

/// Dispatch the notification pair for a submission
#[utoipa::path(
    post,
    operation_id = "create_submission",
    tag = "Submissions",
    path = "/api/v1/submissions",
    request_body = SubmissionBody,
    responses(
        (status = StatusCode::OK, description = "Both notifications sent", body = SubmissionResponse),
        (status = StatusCode::METHOD_NOT_ALLOWED, description = "Wrong method"),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Unprocessable entity", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "A notification could not be sent", body = ErrorResponse),
    )
)]
pub async fn handler<D: SubmissionDispatch, W: TemplateDelivery>(
    State(state): State<AppState<D, W>>,
    request: Result<Json<SubmissionBody>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let Json(request) = request?;

    let mut record: SubmissionRecord = request.try_into()?;
    record.item_name = state.catalog.resolve_item_name(&record.item_name);

    state.dispatch.dispatch(&record).await?;

    Ok(Json(SubmissionResponse {
        message: "Emails sent successfully".to_string(),
    }))
}
