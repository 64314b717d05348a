//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Contact Relay"),
    paths(
        submissions::handler,
        services::list,
        services::get_by_id,
        cache_manifest::handler,
        uptime::handler
    ),
    components(schemas(
        submissions::SubmissionBody,
        submissions::SubmissionResponse,
        crate::domain::catalog::ServiceDetails,
        crate::domain::offline::CacheManifest,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
