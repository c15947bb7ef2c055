//! Web search providers.
//!
//! Search is abstracted behind the [`SearchProvider`] trait so the retriever
//! never depends on a concrete backend. The shipped implementation is
//! [`GoogleSearch`], which queries the Google Programmable Search JSON API
//! and degrades to a synthetic internal-knowledge result when credentials
//! are missing or the request fails.
//!
//! # Fallback semantics
//!
//! A degraded provider still returns `Ok`: the fallback item carries the
//! reserved `llm://internal-knowledge` locator so downstream aggregation can
//! tell synthetic references apart from crawled URLs. Hard errors from the
//! trait are reserved for backends that genuinely cannot answer at all.

/// Search provider trait and the internal-knowledge fallback item.
pub mod provider;
/// Google Programmable Search implementation.
pub mod google;

pub use google::GoogleSearch;
pub use provider::{fallback_evidence, SearchProvider, FALLBACK_LOCATOR};
