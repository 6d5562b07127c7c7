use crate::application::http::recipe::validators::EnrichRecipeRequest;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use recipe_master_core::domain::common::entities::app_errors::CoreError;
use recipe_master_core::domain::recipe::{
    entities::RecipeResult, ports::RecipeService, session::RecipeSession,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EnrichRecipeResponse {
    pub data: RecipeResult,
}

#[utoipa::path(
    post,
    path = "/enrich",
    tag = "recipe",
    summary = "Enrich a recipe",
    description = "Generates ingredients, substitutions, pairings and nutrition for a dish, tailored to the health profile. Upstream failures still answer 200 with a degraded result carrying a notice.",
    responses(
        (status = 200, body = EnrichRecipeResponse),
        (status = 400, body = crate::application::http::server::api_entities::api_error::ApiErrorResponse)
    ),
    request_body = EnrichRecipeRequest
)]
pub async fn enrich_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EnrichRecipeRequest>,
) -> Result<Response<EnrichRecipeResponse>, ApiError> {
    let request = payload
        .collector()
        .submit()
        .map_err(|e| ApiError::from(CoreError::from(e)))?;

    let mut session = RecipeSession::new(request);
    for ingredient in &payload.missing_ingredients {
        session.add_missing_ingredient(ingredient);
    }

    let result = state.service.enrich(session.request()).await;

    Ok(Response::OK(EnrichRecipeResponse { data: result }))
}
