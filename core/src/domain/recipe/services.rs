use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    common::{generate_uuid_v7, ports::RandomSource, services::Service},
    recipe::{
        entities::{
            EnrichmentOutcome, EnrichmentRequest, Nutrition, Pairing, PairingDraft, RecipeDraft,
            RecipeResult,
        },
        images::{build_search_query, fallback_image, filter_candidates, pick},
        parser::parse_recipe_response,
        ports::{ImageSearchClient, LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        schema::get_recipe_schema,
        value_objects::{EnrichmentStage, ImageSubject},
    },
};

pub const DEGRADED_NOTICE: &str = "We couldn't load the full recipe right now. Please try again.";
const UNAVAILABLE: &str = "N/A";

impl<LLM, IS, RS> RecipeService for Service<LLM, IS, RS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
    RS: RandomSource,
{
    async fn enrich(&self, request: EnrichmentRequest) -> RecipeResult {
        self.enrich_with_outcome(request).await.into_result()
    }

    #[instrument(
        skip(self, request),
        fields(
            enrichment_id = %generate_uuid_v7(),
            dish = %request.dish_name,
            missing_ingredients = request.missing_ingredients.len(),
        )
    )]
    async fn enrich_with_outcome(&self, request: EnrichmentRequest) -> EnrichmentOutcome {
        // 1. Build prompt
        let prompt = build_recipe_prompt(&request);

        // 2. Call LLM
        debug!(stage = %EnrichmentStage::Requesting, "requesting recipe from LLM");
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_schema(), self.generation.clone())
            .await;

        // 3. Parse response, all or nothing
        debug!(stage = %EnrichmentStage::Parsing, "parsing LLM response");
        let draft = match raw_response.and_then(|raw| parse_recipe_response(&raw)) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(stage = %EnrichmentStage::Failed, error = %e, "returning degraded recipe");
                return EnrichmentOutcome::Degraded {
                    result: self.degraded_result(&request.dish_name),
                    reason: e.to_string(),
                };
            }
        };

        // 4. Resolve images and assemble
        debug!(
            stage = %EnrichmentStage::ResolvingImages,
            pairings = draft.pairings.len(),
            "resolving images"
        );
        let result = self.assemble(&request.dish_name, draft).await;

        info!(stage = %EnrichmentStage::Ready, "recipe ready");
        EnrichmentOutcome::Success(result)
    }
}

impl<LLM, IS, RS> Service<LLM, IS, RS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
    RS: RandomSource,
{
    async fn assemble(&self, dish_name: &str, draft: RecipeDraft) -> RecipeResult {
        let RecipeDraft {
            ingredients,
            substitutions,
            pairings,
            nutrition,
        } = draft;

        let pairings = join_all(
            pairings
                .into_iter()
                .map(|pairing| self.resolve_pairing(pairing)),
        );
        let (main_image, pairings) =
            futures::join!(self.resolve_image(dish_name, ImageSubject::Main), pairings);

        RecipeResult {
            ingredients,
            substitutions,
            pairings,
            nutrition,
            main_image,
            notice: None,
        }
    }

    async fn resolve_pairing(&self, pairing: PairingDraft) -> Pairing {
        let image = self
            .resolve_image(&pairing.name, ImageSubject::Pairing)
            .await;

        Pairing {
            name: pairing.name,
            description: pairing.description,
            image,
        }
    }

    /// Finds a photo for `subject`, falling back to the category pool when
    /// search is not configured, fails, or yields nothing usable.
    async fn resolve_image(&self, subject: &str, kind: ImageSubject) -> String {
        if !self.image_search.is_configured() {
            debug!(subject, "image search not configured, using fallback image");
            return fallback_image(subject, self.random.as_ref());
        }

        let query = build_search_query(subject, kind);
        let candidates = match self.image_search.search(query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(subject, error = %e, "image search failed, using fallback image");
                return fallback_image(subject, self.random.as_ref());
            }
        };

        let acceptable = filter_candidates(candidates);
        match pick(&acceptable, self.random.as_ref()) {
            Some(candidate) => candidate.src.clone(),
            None => {
                debug!(subject, "no acceptable image candidates, using fallback image");
                fallback_image(subject, self.random.as_ref())
            }
        }
    }

    fn degraded_result(&self, dish_name: &str) -> RecipeResult {
        RecipeResult {
            ingredients: vec!["Error loading ingredients".to_string()],
            substitutions: Vec::new(),
            pairings: Vec::new(),
            nutrition: Nutrition {
                calories: UNAVAILABLE.to_string(),
                protein: UNAVAILABLE.to_string(),
                carbs: UNAVAILABLE.to_string(),
                fat: UNAVAILABLE.to_string(),
                benefits: vec!["Information unavailable".to_string()],
            },
            main_image: fallback_image(dish_name, self.random.as_ref()),
            notice: Some(DEGRADED_NOTICE.to_string()),
        }
    }
}
