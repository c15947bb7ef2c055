//! Core types for the research pipeline: request/response payloads, the
//! pipeline data model, and the application error type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Request body for a research run.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchRequest {
    /// Free-text research question; must be non-blank.
    pub query: String,
    /// Per-sub-task result cap override (clamped to 1..=5).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

/// Response body for a completed research run.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchResponse {
    /// Structured pipeline output.
    pub result: ResearchResult,
    /// The result rendered as a plain-text brief.
    pub brief: String,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

// ============= Research Pipeline Types =============

/// A single planned sub-query.
///
/// Indices are 1-based and contiguous within a run; at most 5 sub-tasks
/// exist per research query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubTask {
    /// 1-based position in the plan.
    pub index: usize,
    /// The derived search query for this sub-task.
    pub query: String,
}

impl SubTask {
    /// Create a sub-task at the given 1-based index.
    pub fn new(index: usize, query: impl Into<String>) -> Self {
        Self {
            index,
            query: query.into(),
        }
    }
}

/// One piece of evidence returned by a search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EvidenceItem {
    /// Result title, or a placeholder when the provider omits one.
    pub title: String,
    /// Short description of the result.
    pub snippet: String,
    /// Source locator and deduplication key: either a crawled http(s) URL
    /// or an internal `llm://` identifier for fallback evidence.
    pub url: String,
    /// Human-readable source label (e.g. a display domain).
    pub source: String,
}

/// The evidence actually retrieved for one sub-task.
///
/// An empty `evidence` list records a failed, timed-out, or cancelled
/// sub-task; the slot is never dropped from the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskFinding {
    /// The sub-task this finding answers.
    pub task: SubTask,
    /// Evidence returned for the sub-task, in rank order.
    pub evidence: Vec<EvidenceItem>,
}

impl TaskFinding {
    /// Pair a sub-task with the evidence retrieved for it.
    pub fn new(task: SubTask, evidence: Vec<EvidenceItem>) -> Self {
        Self { task, evidence }
    }

    /// A degraded finding for a sub-task whose search failed.
    pub fn empty(task: SubTask) -> Self {
        Self {
            task,
            evidence: Vec::new(),
        }
    }
}

/// Aggregate output of one pipeline run.
///
/// Built incrementally across the PLAN -> RETRIEVE -> AGGREGATE ->
/// SYNTHESIZE stages and immutable once returned. `findings` is always
/// 1:1 with `tasks`, in the same order; `references` holds the first-seen
/// deduplicated evidence across all findings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResearchResult {
    /// The trimmed input query.
    pub query: String,
    /// When the run started.
    pub timestamp: DateTime<Utc>,
    /// Planned sub-tasks, in plan order.
    pub tasks: Vec<SubTask>,
    /// One finding per sub-task, in the same order.
    pub findings: Vec<TaskFinding>,
    /// Deduplicated references in first-seen order.
    pub references: Vec<EvidenceItem>,
    /// Synthesized summary, or the failure marker if synthesis failed.
    pub summary: String,
}

// ============= Error Types =============

/// Application error type.
///
/// Provider failures ([`AppError::LLM`], [`AppError::Search`]) are absorbed
/// inside the pipeline's degradation paths and normally never reach a
/// caller; the variants exist so collaborators have a typed failure channel.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input query was blank or otherwise unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A language model call failed.
    #[error("LLM error: {0}")]
    LLM(String),

    /// A search provider call failed.
    #[error("Search error: {0}")]
    Search(String),

    /// A research result violated a structural contract.
    #[error("Malformed research result: {0}")]
    Format(String),

    /// Configuration could not be loaded or applied.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::LLM(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Search(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Format(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Configuration(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
