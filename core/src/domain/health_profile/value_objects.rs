use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A yes/no question of the health questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    Diabetic,
    Allergies,
    FitnessEnthusiast,
    LactoseIntolerant,
    Pregnant,
    Pcos,
}
