use thiserror::Error;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthProfileError {
    #[error("name is required")]
    MissingName,

    #[error("gender is required")]
    MissingGender,

    #[error("dish name is required")]
    MissingDishName,
}

impl From<HealthProfileError> for CoreError {
    fn from(error: HealthProfileError) -> Self {
        CoreError::InvalidHealthProfile(error.to_string())
    }
}
