use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{EnrichmentOutcome, EnrichmentRequest, ImageCandidate, RecipeResult},
        value_objects::GenerationOptions,
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Stock photo search
#[cfg_attr(test, mockall::automock)]
pub trait ImageSearchClient: Send + Sync {
    /// False when no usable credential is configured. Searching is skipped
    /// entirely in that case.
    fn is_configured(&self) -> bool;

    fn search(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<ImageCandidate>, CoreError>> + Send;
}

/// Service trait for recipe enrichment
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Produces a recipe for the request. Never fails: any problem with the
    /// external services yields a degraded result instead.
    fn enrich(&self, request: EnrichmentRequest) -> impl Future<Output = RecipeResult> + Send;

    fn enrich_with_outcome(
        &self,
        request: EnrichmentRequest,
    ) -> impl Future<Output = EnrichmentOutcome> + Send;
}
