use crate::{
    research::{format_brief, ResearchCoordinator},
    types::{ResearchRequest, ResearchResponse, Result},
    AppState,
};
use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;

/// Run the research pipeline for a query
#[utoipa::path(
    post,
    path = "/api/research",
    request_body = ResearchRequest,
    responses(
        (status = 200, description = "Research completed", body = ResearchResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "research"
)]
pub async fn run_research(
    State(state): State<AppState>,
    Json(payload): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>> {
    let start = Instant::now();

    let mut research_config = state.config.research.clone();
    if let Some(max_results) = payload.max_results {
        research_config.max_results_per_task = max_results;
    }

    let coordinator = ResearchCoordinator::new(
        Arc::clone(&state.llm),
        Arc::clone(&state.search),
        research_config,
    );

    let result = coordinator.research(&payload.query).await?;
    let brief = format_brief(&result)?;

    let duration = start.elapsed();

    Ok(Json(ResearchResponse {
        result,
        brief,
        duration_ms: duration.as_millis() as u64,
    }))
}
