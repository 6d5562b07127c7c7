use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::health_profile::entities::HealthProfile;

/// Everything the orchestrator needs to produce one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EnrichmentRequest {
    pub dish_name: String,
    pub profile: HealthProfile,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
}

impl EnrichmentRequest {
    pub fn new(dish_name: String, profile: HealthProfile) -> Self {
        Self {
            dish_name,
            profile,
            missing_ingredients: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Substitution {
    pub original: String,
    pub substitute: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pairing {
    pub name: String,
    pub description: String,
    pub image: String,
}

/// Free-form nutrition values as the model phrases them, e.g. "350 kcal".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub benefits: Vec<String>,
}

/// The display-ready recipe.
///
/// A degraded result has the same shape as a successful one, with
/// placeholder values and a `notice` the front end may show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeResult {
    pub ingredients: Vec<String>,
    pub substitutions: Vec<Substitution>,
    pub pairings: Vec<Pairing>,
    pub nutrition: Nutrition,
    pub main_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairingDraft {
    pub name: String,
    pub description: String,
}

/// The model's answer before images are attached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeDraft {
    pub ingredients: Vec<String>,
    pub substitutions: Vec<Substitution>,
    pub pairings: Vec<PairingDraft>,
    pub nutrition: Nutrition,
}

/// A photo returned by the image search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub width: u32,
    pub height: u32,
    /// Page URL of the photo, its slug describes the picture.
    pub url: String,
    /// Direct link to the rendition that gets displayed.
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    Success(RecipeResult),
    Degraded { result: RecipeResult, reason: String },
}

impl EnrichmentOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, EnrichmentOutcome::Degraded { .. })
    }

    pub fn into_result(self) -> RecipeResult {
        match self {
            EnrichmentOutcome::Success(result) => result,
            EnrichmentOutcome::Degraded { result, .. } => result,
        }
    }
}
