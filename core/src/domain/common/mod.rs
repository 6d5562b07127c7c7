use chrono::Utc;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod ports;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeMasterConfig {
    pub llm: LLMConfig,
    pub image_search: ImageSearchConfig,
    pub random_seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LLMProviderKind {
    OpenAI,
    Gemini,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProviderKind,
    pub api_key: String,
    pub model: String,
    /// Overrides the provider's public endpoint, mostly for local proxies.
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Clone, Debug)]
pub struct ImageSearchConfig {
    pub pexels_api_key: Option<String>,
    pub base_url: String,
}

pub fn generate_timestamp() -> Timestamp {
    let seconds = Utc::now().timestamp().try_into().unwrap_or(0);
    Timestamp::from_unix(NoContext, seconds, 0)
}

pub fn generate_uuid_v7() -> Uuid {
    Uuid::new_v7(generate_timestamp())
}
