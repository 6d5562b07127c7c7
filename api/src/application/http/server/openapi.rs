use crate::application::http::{
    health::HealthApiDoc,
    recipe::router::{HealthProfileApiDoc, RecipeApiDoc},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Master API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/health-profiles", api = HealthProfileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
