use crate::application::http::recipe::validators::HealthProfileRequest;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use recipe_master_core::domain::common::entities::app_errors::CoreError;
use recipe_master_core::domain::health_profile::entities::HealthProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateHealthProfileResponse {
    pub data: HealthProfile,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Shape a health profile",
    description = "Runs the profile questionnaire answers through the collector and returns the profile exactly as it would be sent with a recipe request.",
    responses(
        (status = 200, body = CreateHealthProfileResponse),
        (status = 400, body = crate::application::http::server::api_entities::api_error::ApiErrorResponse)
    ),
    request_body = HealthProfileRequest
)]
pub async fn create_health_profile(
    ValidateJson(payload): ValidateJson<HealthProfileRequest>,
) -> Result<Response<CreateHealthProfileResponse>, ApiError> {
    let profile = payload
        .collector()
        .profile()
        .map_err(|e| ApiError::from(CoreError::from(e)))?;

    Ok(Response::OK(CreateHealthProfileResponse { data: profile }))
}
