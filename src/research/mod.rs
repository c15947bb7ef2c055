//! Research pipeline orchestration.
//!
//! This module turns a free-text query into a structured research brief by
//! running a fixed four-stage pipeline. Each stage is a separate component
//! with a narrow contract, composed by [`ResearchCoordinator`]:
//!
//! 1. **Plan** - [`planner::TaskPlanner`] decomposes the query into 1-5
//!    sub-tasks, falling back to fixed templates if the model is unusable.
//! 2. **Retrieve** - [`retriever::Retriever`] fans sub-tasks out to the
//!    search provider concurrently and reassembles findings in task order.
//! 3. **Aggregate** - [`aggregator::collect_references`] deduplicates
//!    evidence by locator into a first-seen-ordered reference list.
//! 4. **Synthesize** - [`synthesizer::Synthesizer`] asks the model for a
//!    structured summary of everything retrieved.
//!
//! Stages never run out of order and never repeat within a run. Provider
//! failures degrade inside the owning stage (fallback tasks, empty findings,
//! a failure-marker summary); the only error a caller ever sees from a run
//! is the rejection of a blank query.
//!
//! # Usage
//!
//! ```ignore
//! use dossier::research::{format_brief, ResearchCoordinator};
//!
//! let coordinator = ResearchCoordinator::new(llm, search, config.research.clone());
//! let result = coordinator.research("impact of remote work on productivity").await?;
//! println!("{}", format_brief(&result)?);
//! ```

/// Reference deduplication.
pub mod aggregator;
/// Plain-text brief rendering.
pub mod brief;
/// Pipeline driver.
pub mod coordinator;
/// Query decomposition into sub-tasks.
pub mod planner;
/// Concurrent evidence retrieval.
pub mod retriever;
/// Summary generation.
pub mod synthesizer;

pub use aggregator::collect_references;
pub use brief::format_brief;
pub use coordinator::ResearchCoordinator;
pub use planner::TaskPlanner;
pub use retriever::Retriever;
pub use synthesizer::{Synthesizer, SYNTHESIS_FAILURE_MARKER};

/// Truncate to at most `max_chars` characters without splitting a UTF-8
/// sequence. Returns the input unchanged when it is short enough.
pub(crate) fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
