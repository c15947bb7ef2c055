use crate::llm::client::LanguageModel;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use ollama_rs::{
    Ollama,
    generation::chat::{ChatMessage, request::ChatMessageRequest},
};

/// Language model backed by a local Ollama server.
pub struct OllamaClient {
    client: Ollama,
    model: String,
}

impl OllamaClient {
    /// Build a client from a base URL like `http://localhost:11434`.
    ///
    /// A URL that cannot be parsed falls back to the library default
    /// endpoint (`http://127.0.0.1:11434`) rather than failing, matching
    /// the permissive defaults used elsewhere in configuration.
    pub fn new(base_url: String, model: String) -> Self {
        let client = Ollama::try_new(base_url).unwrap_or_default();

        Self { client, model }
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages = vec![ChatMessage::user(prompt.to_string())];

        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| AppError::LLM(format!("Ollama error: {}", e)))?;

        Ok(response.message.content)
    }

    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let messages = vec![
            ChatMessage::system(system.to_string()),
            ChatMessage::user(prompt.to_string()),
        ];

        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| AppError::LLM(format!("Ollama error: {}", e)))?;

        Ok(response.message.content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_constructs() {
        let client = OllamaClient::new(
            "http://localhost:11434".to_string(),
            "llama3".to_string(),
        );
        assert_eq!(client.model_name(), "llama3");
    }

    #[test]
    fn test_custom_host_and_port_construct() {
        let client = OllamaClient::new(
            "http://192.168.1.100:8080".to_string(),
            "mistral".to_string(),
        );
        assert_eq!(client.model_name(), "mistral");
    }

    #[test]
    fn test_https_url_constructs() {
        let client = OllamaClient::new(
            "https://ollama.internal:11434".to_string(),
            "llama3".to_string(),
        );
        assert_eq!(client.model_name(), "llama3");
    }

    #[test]
    fn test_malformed_url_falls_back_to_default() {
        let client = OllamaClient::new("not a url".to_string(), "llama3".to_string());
        assert_eq!(client.model_name(), "llama3");
    }
}
