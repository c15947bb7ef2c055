//! Language model clients.
//!
//! This module abstracts text generation behind the [`LanguageModel`] trait so
//! the research pipeline never depends on a concrete provider. The shipped
//! implementation is [`OllamaClient`], which talks to a local Ollama server;
//! tests substitute scripted models through the same trait.
//!
//! # Example
//!
//! ```ignore
//! use dossier::llm::{LanguageModel, OllamaClient};
//!
//! let client = OllamaClient::new("http://localhost:11434".to_string(), "llama3".to_string());
//! let answer = client.generate("What is 2+2?").await?;
//! ```

/// Core language model trait.
pub mod client;
/// Ollama-backed implementation.
pub mod ollama;

pub use client::LanguageModel;
pub use ollama::OllamaClient;
