use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Conditions that are only asked about, and only sent to the model, for
/// female users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FemaleConditions {
    pub is_pregnant: bool,
    pub has_pcos: bool,
}

/// Health data collected before a recipe is requested.
///
/// `allergies` is only present when `has_allergies` is set and
/// `female_conditions` only when `gender` is [`Gender::Female`]. Absent fields
/// are skipped on the wire rather than sent as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthProfile {
    pub name: String,
    pub gender: Gender,
    pub is_diabetic: bool,
    pub has_allergies: bool,
    pub is_fitness_enthusiast: bool,
    pub is_lactose_intolerant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female_conditions: Option<FemaleConditions>,
}

impl HealthProfile {
    /// A profile with no conditions set.
    pub fn new(name: String, gender: Gender) -> Self {
        Self {
            name,
            gender,
            is_diabetic: false,
            has_allergies: false,
            is_fitness_enthusiast: false,
            is_lactose_intolerant: false,
            allergies: None,
            female_conditions: match gender {
                Gender::Female => Some(FemaleConditions::default()),
                Gender::Male | Gender::Other => None,
            },
        }
    }

    pub fn is_pregnant(&self) -> bool {
        self.female_conditions.is_some_and(|c| c.is_pregnant)
    }

    pub fn has_pcos(&self) -> bool {
        self.female_conditions.is_some_and(|c| c.has_pcos)
    }
}
