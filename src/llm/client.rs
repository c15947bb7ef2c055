//! Language model client abstraction.

use crate::types::Result;
use async_trait::async_trait;

/// Generic text-generation trait for provider abstraction.
///
/// The planner and synthesizer talk to the model exclusively through this
/// trait, so a different backend (or a test double) can be swapped in without
/// changing pipeline code.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a completion from a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate with a system prompt steering the response.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}
