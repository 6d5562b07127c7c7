use recipe_master_core::domain::health_profile::{
    entities::Gender, services::HealthProfileCollector, value_objects::HealthCondition,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct HealthProfileRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,

    /// Required; left optional here so a missing value reports like a blank name
    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub is_diabetic: bool,

    #[serde(default)]
    pub has_allergies: bool,

    #[serde(default)]
    pub is_fitness_enthusiast: bool,

    #[serde(default)]
    pub is_lactose_intolerant: bool,

    #[serde(default)]
    pub is_pregnant: bool,

    #[serde(default)]
    pub has_pcos: bool,

    #[serde(default)]
    #[validate(length(max = 500, message = "allergies must be at most 500 characters"))]
    pub allergies: Option<String>,
}

impl HealthProfileRequest {
    /// Replays the payload through the profile wizard.
    pub fn collector(&self) -> HealthProfileCollector {
        let mut collector = HealthProfileCollector::new();
        collector
            .set_name(self.name.as_str())
            .set_condition(HealthCondition::Diabetic, self.is_diabetic)
            .set_condition(HealthCondition::Allergies, self.has_allergies)
            .set_condition(HealthCondition::FitnessEnthusiast, self.is_fitness_enthusiast)
            .set_condition(HealthCondition::LactoseIntolerant, self.is_lactose_intolerant)
            .set_condition(HealthCondition::Pregnant, self.is_pregnant)
            .set_condition(HealthCondition::Pcos, self.has_pcos);

        if let Some(gender) = self.gender {
            collector.set_gender(gender);
        }
        if let Some(allergies) = &self.allergies {
            collector.set_allergy_text(allergies.as_str());
        }
        collector
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EnrichRecipeRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: HealthProfileRequest,

    #[validate(length(min = 1, max = 200, message = "dish_name must be 1 to 200 characters"))]
    pub dish_name: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 missing ingredients"))]
    pub missing_ingredients: Vec<String>,
}

impl EnrichRecipeRequest {
    pub fn collector(&self) -> HealthProfileCollector {
        let mut collector = self.profile.collector();
        collector.set_dish_name(self.dish_name.as_str());
        collector
    }
}
