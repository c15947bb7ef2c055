//! Mock implementations for testing.
//!
//! This module provides mock language model and search provider
//! implementations that can be used across different test files without
//! duplication. Both are scriptable: the model replays a fixed sequence of
//! replies, the provider answers per query.

use async_trait::async_trait;
use dossier::llm::LanguageModel;
use dossier::search::SearchProvider;
use dossier::types::{AppError, EvidenceItem, Result};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Mock language model that replays scripted replies in call order.
///
/// Pipeline runs call the model twice (planning, then synthesis), so a
/// scripted mock with two replies drives a full run deterministically. Once
/// the script is exhausted further calls return an error, which makes a
/// missing reply behave like a provider failure instead of hanging a test.
///
/// # Examples
///
/// ```ignore
/// // One reply for every call site that only generates once
/// let llm = MockLanguageModel::new("Task 1: background");
///
/// // Plan reply first, synthesis reply second
/// let llm = MockLanguageModel::scripted(&["Task 1: background", "Summary."]);
///
/// // Always fails
/// let llm = MockLanguageModel::failing();
/// ```
pub struct MockLanguageModel {
    replies: Mutex<VecDeque<String>>,
    should_fail: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockLanguageModel {
    /// Create a mock that returns the given reply to the first call.
    pub fn new(reply: &str) -> Self {
        Self::scripted(&[reply])
    }

    /// Create a mock that returns the given replies in order.
    pub fn scripted(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            should_fail: false,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns an error.
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            should_fail: true,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep for `delay` before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of generation calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn reply(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => Ok(reply),
            None => Err(AppError::LLM("mock reply script exhausted".to_string())),
        }
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.reply().await
    }

    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        self.reply().await
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock search provider that answers per query string.
///
/// Retrieval fans sub-task searches out concurrently, so replies are keyed
/// by query rather than call order; per-query delays make individual calls
/// slow without affecting the rest of the batch.
pub struct MockSearchProvider {
    default: Vec<EvidenceItem>,
    responses: HashMap<String, Vec<EvidenceItem>>,
    delays: HashMap<String, Duration>,
    should_fail: bool,
    calls: AtomicUsize,
    last_max_results: AtomicUsize,
}

impl MockSearchProvider {
    /// Create a mock that returns the given evidence for every query.
    pub fn returning(evidence: Vec<EvidenceItem>) -> Self {
        Self {
            default: evidence,
            responses: HashMap::new(),
            delays: HashMap::new(),
            should_fail: false,
            calls: AtomicUsize::new(0),
            last_max_results: AtomicUsize::new(0),
        }
    }

    /// Create a mock that returns no evidence for any query.
    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }

    /// Create a mock that always returns an error.
    pub fn failing() -> Self {
        let mut mock = Self::empty();
        mock.should_fail = true;
        mock
    }

    /// Answer `query` with `evidence` instead of the default.
    pub fn respond_to(mut self, query: &str, evidence: Vec<EvidenceItem>) -> Self {
        self.responses.insert(query.to_string(), evidence);
        self
    }

    /// Sleep for `delay` before answering `query`.
    pub fn delay_for(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Number of search calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The `max_results` argument of the most recent call.
    pub fn last_max_results(&self) -> usize {
        self.last_max_results.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<EvidenceItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_max_results.store(max_results, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.should_fail {
            return Err(AppError::Search("Mock search failure".to_string()));
        }
        Ok(self
            .responses
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }
}

/// Build an evidence item with a derived snippet and source.
pub fn evidence(title: &str, url: &str) -> EvidenceItem {
    EvidenceItem {
        title: title.to_string(),
        snippet: format!("Snippet for {}", title),
        url: url.to_string(),
        source: "example.com".to_string(),
    }
}
