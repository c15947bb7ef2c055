use crate::types::{EvidenceItem, Result};
use async_trait::async_trait;

/// Reserved locator scheme marking evidence that was synthesized from model
/// knowledge instead of crawled from the web.
pub const FALLBACK_LOCATOR: &str = "llm://internal-knowledge";

/// Source label attached to fallback evidence.
pub const FALLBACK_SOURCE: &str = "LLM Knowledge Base";

/// Generic search trait for provider abstraction.
///
/// Implementations return results in rank order. An empty vec is a valid
/// answer (the query matched nothing); errors are reserved for backends
/// that could not complete the lookup at all.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Resolve a query into a ranked list of evidence items.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<EvidenceItem>>;
}

/// Synthetic stand-in result used when live search is unavailable.
pub fn fallback_evidence(query: &str) -> EvidenceItem {
    EvidenceItem {
        title: format!("Knowledge about {}", query),
        snippet: format!("Based on training data, here's what we know about {}", query),
        url: FALLBACK_LOCATOR.to_string(),
        source: FALLBACK_SOURCE.to_string(),
    }
}
