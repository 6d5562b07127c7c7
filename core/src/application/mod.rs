use crate::{
    domain::{
        common::{RecipeMasterConfig, services::Service},
        recipe::{ports::ImageSearchClient, value_objects::GenerationOptions},
    },
    infrastructure::{image_search::PexelsImageSearch, llm::LLMProvider, random::SeededRandom},
};

pub type RecipeMasterService = Service<LLMProvider, PexelsImageSearch, SeededRandom>;

/// Wires the configured adapters into the domain service.
pub fn create_service(config: RecipeMasterConfig) -> RecipeMasterService {
    let llm_client = LLMProvider::from_config(&config.llm);
    let image_search = PexelsImageSearch::new(
        config.image_search.pexels_api_key.clone(),
        Some(config.image_search.base_url.clone()),
    );
    let random = SeededRandom::from_seed_option(config.random_seed);

    tracing::info!(
        provider = ?config.llm.provider,
        model = %config.llm.model,
        image_search_configured = image_search.is_configured(),
        "recipe service created"
    );

    Service::new(
        llm_client,
        image_search,
        random,
        GenerationOptions {
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
        },
    )
}

