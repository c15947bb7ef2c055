use crate::types::{EvidenceItem, ResearchRequest, ResearchResponse, ResearchResult, SubTask, TaskFinding};
use crate::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

/// OpenAPI description of the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::research::run_research,
        crate::api::handlers::health::health_check,
    ),
    components(schemas(
        ResearchRequest,
        ResearchResponse,
        ResearchResult,
        SubTask,
        TaskFinding,
        EvidenceItem,
        crate::api::handlers::health::HealthResponse,
    )),
    tags(
        (name = "research", description = "Research pipeline"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Build the application router. State is attached by the caller.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(crate::api::handlers::health::health_check))
        .route(
            "/api/research",
            post(crate::api::handlers::research::run_research),
        )
        .route("/api/openapi.json", get(openapi_spec))
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
