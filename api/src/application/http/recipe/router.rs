use super::handlers::create_health_profile::{
    __path_create_health_profile, create_health_profile,
};
use super::handlers::enrich_recipe::{__path_enrich_recipe, enrich_recipe};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(enrich_recipe))]
pub struct RecipeApiDoc;

#[derive(OpenApi)]
#[openapi(paths(create_health_profile))]
pub struct HealthProfileApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/enrich", state.args.server.root_path),
            post(enrich_recipe),
        )
        .route(
            &format!("{}/health-profiles", state.args.server.root_path),
            post(create_health_profile),
        )
}
