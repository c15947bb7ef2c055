//! Pipeline driver.
//!
//! Runs the four pipeline stages in a fixed order and accumulates the
//! [`ResearchResult`]. Collaborator failures are absorbed by the owning
//! stage, so a run has exactly one externally observable failure mode:
//! rejecting a blank query before any stage starts.

use crate::config::ResearchConfig;
use crate::llm::LanguageModel;
use crate::research::{collect_references, Retriever, Synthesizer, TaskPlanner};
use crate::search::SearchProvider;
use crate::types::{AppError, ResearchResult, Result};
use chrono::Utc;
use std::sync::Arc;

/// Drives the four-stage pipeline and assembles the result.
pub struct ResearchCoordinator {
    planner: TaskPlanner,
    retriever: Retriever,
    synthesizer: Synthesizer,
}

impl ResearchCoordinator {
    /// Build a coordinator around the given collaborators and tunables.
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        search: Arc<dyn SearchProvider>,
        config: ResearchConfig,
    ) -> Self {
        Self {
            planner: TaskPlanner::new(Arc::clone(&llm), config.plan_timeout()),
            retriever: Retriever::new(search, config.max_results_per_task, config.search_timeout()),
            synthesizer: Synthesizer::new(llm, config.synthesis_timeout()),
        }
    }

    /// Execute the full research pipeline for a query.
    ///
    /// The returned result is complete and well-formed for any non-blank
    /// query, possibly with degraded content (fallback tasks, empty
    /// findings, a failure-marker summary). Blank queries are rejected
    /// before any collaborator is called.
    pub async fn research(&self, query: &str) -> Result<ResearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::InvalidInput(
                "Research query cannot be empty".to_string(),
            ));
        }

        let timestamp = Utc::now();
        tracing::info!("Starting research for query: {}", query);

        let tasks = self.planner.plan(query).await;
        tracing::debug!(stage = "plan", tasks = tasks.len(), "Planned research tasks");

        let findings = self.retriever.retrieve(&tasks).await;
        tracing::debug!(
            stage = "retrieve",
            findings = findings.len(),
            "Retrieved evidence for all sub-tasks"
        );

        let references = collect_references(&findings);
        tracing::debug!(
            stage = "aggregate",
            references = references.len(),
            "Collected unique references"
        );

        let summary = self.synthesizer.synthesize(query, &findings).await;
        tracing::debug!(stage = "synthesize", chars = summary.len(), "Synthesized summary");

        tracing::info!(
            "Research complete: {} tasks, {} references",
            tasks.len(),
            references.len()
        );

        Ok(ResearchResult {
            query: query.to_string(),
            timestamp,
            tasks,
            findings,
            references,
            summary,
        })
    }
}
