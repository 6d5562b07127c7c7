use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{ports::LLMClient, value_objects::GenerationOptions},
};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(api_key: String, model_name: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            model_name,
            base_url,
            client: Client::new(),
        }
    }

    async fn call_openai_api(&self, request: ChatCompletionRequest) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for OpenAILLMClient {
    /// Chat completions has no schema slot here; the prompt itself spells
    /// out the JSON shape.
    #[instrument(skip(self, prompt, _response_schema), fields(model = %self.model_name))]
    async fn generate_with_text(
        &self,
        prompt: String,
        _response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        self.call_openai_api(request).await
    }
}
