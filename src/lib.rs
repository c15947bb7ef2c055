//! # Dossier - Automated Research Brief Server
//!
//! A research orchestration server built in Rust: one query in, a structured
//! research brief out. The pipeline plans sub-tasks with a local LLM, fans
//! them out to web search, deduplicates the evidence into a reference list,
//! and synthesizes an executive summary.
//!
//! ## Overview
//!
//! Dossier can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `dossier-server` binary
//! 2. **As a library** - Import the pipeline components into your own project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use dossier::llm::OllamaClient;
//! use dossier::research::{format_brief, ResearchCoordinator};
//! use dossier::search::GoogleSearch;
//! use dossier::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let llm = Arc::new(OllamaClient::new(
//!         config.llm.ollama_url.clone(),
//!         config.llm.model.clone(),
//!     ));
//!     let search = Arc::new(GoogleSearch::new(
//!         &config.search,
//!         config.research.search_timeout(),
//!     )?);
//!
//!     let coordinator = ResearchCoordinator::new(llm, search, config.research.clone());
//!     let result = coordinator.research("impact of remote work on productivity").await?;
//!
//!     println!("{}", format_brief(&result)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Degradation Model
//!
//! Provider failures never abort a run. Planning falls back to fixed
//! template sub-tasks, unreachable search degrades to internal-knowledge
//! evidence, and a failed synthesis records an explicit failure marker.
//! The only fatal input error is a blank query.
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Command-line interface and terminal output
//! - [`config`] - Environment-based configuration
//! - [`llm`] - Language model clients
//! - [`research`] - The four-stage research pipeline
//! - [`search`] - Web search providers
//! - [`types`] - Common types and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface and colored terminal output.
pub mod cli;
/// Environment-based configuration.
pub mod config;
/// Language model clients and abstractions.
pub mod llm;
/// Research pipeline orchestration.
pub mod research;
/// Web search providers.
pub mod search;
/// Core types (requests, responses, errors).
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use llm::{LanguageModel, OllamaClient};
pub use research::{format_brief, ResearchCoordinator};
pub use search::{GoogleSearch, SearchProvider};
pub use types::{AppError, Result};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Language model client
    pub llm: Arc<dyn LanguageModel>,
    /// Search provider
    pub search: Arc<dyn SearchProvider>,
}
