pub mod gemini_client;
pub mod openai_client;

use crate::domain::{
    common::{LLMConfig, LLMProviderKind, entities::app_errors::CoreError},
    recipe::{ports::LLMClient, value_objects::GenerationOptions},
};

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAILLMClient;

/// The configured completion backend.
#[derive(Debug, Clone)]
pub enum LLMProvider {
    OpenAI(OpenAILLMClient),
    Gemini(GeminiLLMClient),
}

impl LLMProvider {
    pub fn from_config(config: &LLMConfig) -> Self {
        match config.provider {
            LLMProviderKind::OpenAI => LLMProvider::OpenAI(OpenAILLMClient::new(
                config.api_key.clone(),
                config.model.clone(),
                config.base_url.clone(),
            )),
            LLMProviderKind::Gemini => LLMProvider::Gemini(GeminiLLMClient::new(
                config.api_key.clone(),
                config.model.clone(),
                config.base_url.clone(),
            )),
        }
    }
}

impl LLMClient for LLMProvider {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        match self {
            LLMProvider::OpenAI(client) => {
                client
                    .generate_with_text(prompt, response_schema, options)
                    .await
            }
            LLMProvider::Gemini(client) => {
                client
                    .generate_with_text(prompt, response_schema, options)
                    .await
            }
        }
    }
}
