//! Concurrent evidence retrieval.
//!
//! One search call per sub-task, all issued concurrently. Results are
//! written into an index-addressed slot per sub-task and read back in task
//! order, so downstream stages never observe completion-order artifacts.
//! A failed, timed-out, or cancelled sub-task yields an empty finding
//! rather than aborting the batch.

use crate::search::SearchProvider;
use crate::types::{EvidenceItem, SubTask, TaskFinding};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Resolves a sub-task list against the search provider.
pub struct Retriever {
    search: Arc<dyn SearchProvider>,
    max_results: usize,
    timeout: Duration,
}

impl Retriever {
    /// `max_results` is the per-task result cap, clamped to 1..=5.
    pub fn new(search: Arc<dyn SearchProvider>, max_results: usize, timeout: Duration) -> Self {
        Self {
            search,
            max_results: max_results.clamp(1, 5),
            timeout,
        }
    }

    /// Resolve every sub-task against the search provider.
    ///
    /// The returned findings are 1:1 with `subtasks` and in the same order.
    pub async fn retrieve(&self, subtasks: &[SubTask]) -> Vec<TaskFinding> {
        let mut set = JoinSet::new();

        for (i, task) in subtasks.iter().enumerate() {
            let search = Arc::clone(&self.search);
            let query = task.query.clone();
            let max_results = self.max_results;
            let timeout = self.timeout;

            set.spawn(async move {
                let evidence =
                    match tokio::time::timeout(timeout, search.search(&query, max_results)).await {
                        Ok(Ok(items)) => items,
                        Ok(Err(e)) => {
                            tracing::warn!("Search failed for sub-task {}: {}", i + 1, e);
                            Vec::new()
                        }
                        Err(_) => {
                            tracing::warn!(
                                "Search timed out for sub-task {} after {:?}",
                                i + 1,
                                timeout
                            );
                            Vec::new()
                        }
                    };
                (i, evidence)
            });
        }

        // Index-addressed slots; a slot left unfilled (panicked or cancelled
        // search task) becomes an empty finding like any other failure.
        let mut slots: Vec<Option<Vec<EvidenceItem>>> = vec![None; subtasks.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((i, evidence)) => slots[i] = Some(evidence),
                Err(e) => tracing::warn!("Search task aborted: {}", e),
            }
        }

        subtasks
            .iter()
            .zip(slots)
            .map(|(task, evidence)| TaskFinding::new(task.clone(), evidence.unwrap_or_default()))
            .collect()
    }
}
