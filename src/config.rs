//! Environment-based configuration.
//!
//! Everything is loaded once at startup via [`Config::from_env`] and passed
//! into constructors explicitly; there is no process-global or mutable
//! configuration state. Reconfiguring means building new collaborators.

use crate::types::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind settings.
    pub server: ServerConfig,
    /// Language model backend settings.
    pub llm: LlmConfig,
    /// Search provider credentials.
    pub search: SearchConfig,
    /// Pipeline tunables.
    pub research: ResearchConfig,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Language model backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the Ollama server.
    pub ollama_url: String,
    /// Model identifier to generate with.
    pub model: String,
}

/// Google Programmable Search credentials.
///
/// Both values must be present for live search; otherwise the provider runs
/// in its degraded fallback mode. Missing credentials are a recognized
/// condition, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// API key for the Custom Search JSON API.
    pub google_api_key: Option<String>,
    /// Programmable Search Engine identifier.
    pub google_cx: Option<String>,
}

impl SearchConfig {
    /// Whether both credentials are present and non-empty.
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.google_api_key, &self.google_cx),
            (Some(key), Some(cx)) if !key.is_empty() && !cx.is_empty()
        )
    }
}

/// Tunables for a pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    /// Search results requested per sub-task (clamped to 1..=5 at use).
    pub max_results_per_task: usize,
    /// Timeout for the planning generation call.
    pub plan_timeout_secs: u64,
    /// Timeout for the long-form synthesis call.
    pub synthesis_timeout_secs: u64,
    /// Timeout for a single search call.
    pub search_timeout_secs: u64,
}

impl ResearchConfig {
    /// Planning call timeout as a [`Duration`].
    pub fn plan_timeout(&self) -> Duration {
        Duration::from_secs(self.plan_timeout_secs)
    }

    /// Synthesis call timeout as a [`Duration`].
    pub fn synthesis_timeout(&self) -> Duration {
        Duration::from_secs(self.synthesis_timeout_secs)
    }

    /// Search call timeout as a [`Duration`].
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            max_results_per_task: 3,
            plan_timeout_secs: 60,
            synthesis_timeout_secs: 120,
            search_timeout_secs: 8,
        }
    }
}

fn env_parse<T: FromStr>(name: &str, default: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| AppError::Configuration(format!("invalid {}: {}", name, e)))
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file first
    /// if one exists. Every setting has a default; only unparseable values
    /// are errors.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env_parse("PORT", "3000")?,
            },
            llm: LlmConfig {
                ollama_url: env::var("OLLAMA_URL")
                    .unwrap_or_else(|_| "http://localhost:11434".to_string()),
                model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string()),
            },
            search: SearchConfig {
                google_api_key: env::var("GOOGLE_API_KEY").ok(),
                google_cx: env::var("GOOGLE_CX").ok(),
            },
            research: ResearchConfig {
                max_results_per_task: env_parse("SEARCH_MAX_RESULTS", "3")?,
                plan_timeout_secs: env_parse("PLAN_TIMEOUT_SECS", "60")?,
                synthesis_timeout_secs: env_parse("SYNTHESIS_TIMEOUT_SECS", "120")?,
                search_timeout_secs: env_parse("SEARCH_TIMEOUT_SECS", "8")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_requires_both_credentials() {
        let unconfigured = SearchConfig {
            google_api_key: None,
            google_cx: None,
        };
        assert!(!unconfigured.is_configured());

        let key_only = SearchConfig {
            google_api_key: Some("key".to_string()),
            google_cx: None,
        };
        assert!(!key_only.is_configured());

        let empty_cx = SearchConfig {
            google_api_key: Some("key".to_string()),
            google_cx: Some(String::new()),
        };
        assert!(!empty_cx.is_configured());

        let configured = SearchConfig {
            google_api_key: Some("key".to_string()),
            google_cx: Some("cx".to_string()),
        };
        assert!(configured.is_configured());
    }

    #[test]
    fn test_research_config_defaults() {
        let cfg = ResearchConfig::default();
        assert_eq!(cfg.max_results_per_task, 3);
        assert_eq!(cfg.plan_timeout(), Duration::from_secs(60));
        assert_eq!(cfg.synthesis_timeout(), Duration::from_secs(120));
        assert_eq!(cfg.search_timeout(), Duration::from_secs(8));
    }
}
