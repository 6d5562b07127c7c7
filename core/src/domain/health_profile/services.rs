use crate::domain::{
    health_profile::{
        entities::{FemaleConditions, Gender, HealthProfile},
        errors::HealthProfileError,
        value_objects::HealthCondition,
    },
    recipe::entities::EnrichmentRequest,
};

/// Accumulates the answers of the profile wizard (name, gender, health
/// questionnaire, dish) and shapes them into an [`EnrichmentRequest`].
///
/// Every field starts empty or unchecked. Answers to female-only questions are
/// remembered while the wizard is open but only make it into the profile when
/// the gender is female at submit time.
#[derive(Debug, Clone, Default)]
pub struct HealthProfileCollector {
    name: String,
    gender: Option<Gender>,
    is_diabetic: bool,
    has_allergies: bool,
    is_fitness_enthusiast: bool,
    is_lactose_intolerant: bool,
    is_pregnant: bool,
    has_pcos: bool,
    allergy_text: String,
    dish_name: String,
}

impl HealthProfileCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_gender(&mut self, gender: Gender) -> &mut Self {
        self.gender = Some(gender);
        self
    }

    pub fn toggle_condition(&mut self, condition: HealthCondition) -> &mut Self {
        let flag = match condition {
            HealthCondition::Diabetic => &mut self.is_diabetic,
            HealthCondition::Allergies => &mut self.has_allergies,
            HealthCondition::FitnessEnthusiast => &mut self.is_fitness_enthusiast,
            HealthCondition::LactoseIntolerant => &mut self.is_lactose_intolerant,
            HealthCondition::Pregnant => &mut self.is_pregnant,
            HealthCondition::Pcos => &mut self.has_pcos,
        };
        *flag = !*flag;
        self
    }

    /// Sets a condition to an explicit value instead of flipping it.
    pub fn set_condition(&mut self, condition: HealthCondition, enabled: bool) -> &mut Self {
        if self.is_checked(condition) != enabled {
            self.toggle_condition(condition);
        }
        self
    }

    pub fn is_checked(&self, condition: HealthCondition) -> bool {
        match condition {
            HealthCondition::Diabetic => self.is_diabetic,
            HealthCondition::Allergies => self.has_allergies,
            HealthCondition::FitnessEnthusiast => self.is_fitness_enthusiast,
            HealthCondition::LactoseIntolerant => self.is_lactose_intolerant,
            HealthCondition::Pregnant => self.is_pregnant,
            HealthCondition::Pcos => self.has_pcos,
        }
    }

    pub fn set_allergy_text(&mut self, allergies: impl Into<String>) -> &mut Self {
        self.allergy_text = allergies.into();
        self
    }

    pub fn set_dish_name(&mut self, dish_name: impl Into<String>) -> &mut Self {
        self.dish_name = dish_name.into();
        self
    }

    /// Builds the profile from the current answers without requiring a dish.
    pub fn profile(&self) -> Result<HealthProfile, HealthProfileError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(HealthProfileError::MissingName);
        }
        let gender = self.gender.ok_or(HealthProfileError::MissingGender)?;

        let allergies = self
            .has_allergies
            .then(|| self.allergy_text.trim().to_string());

        let female_conditions = match gender {
            Gender::Female => Some(FemaleConditions {
                is_pregnant: self.is_pregnant,
                has_pcos: self.has_pcos,
            }),
            Gender::Male | Gender::Other => None,
        };

        Ok(HealthProfile {
            name: name.to_string(),
            gender,
            is_diabetic: self.is_diabetic,
            has_allergies: self.has_allergies,
            is_fitness_enthusiast: self.is_fitness_enthusiast,
            is_lactose_intolerant: self.is_lactose_intolerant,
            allergies,
            female_conditions,
        })
    }

    pub fn submit(&self) -> Result<EnrichmentRequest, HealthProfileError> {
        let profile = self.profile()?;

        let dish_name = self.dish_name.trim();
        if dish_name.is_empty() {
            return Err(HealthProfileError::MissingDishName);
        }

        Ok(EnrichmentRequest::new(dish_name.to_string(), profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(gender: Gender) -> HealthProfileCollector {
        let mut collector = HealthProfileCollector::new();
        collector
            .set_name("Alex")
            .set_gender(gender)
            .set_dish_name("Chocolate Cake");
        collector
    }

    #[test]
    fn test_defaults_are_unchecked() {
        let request = collector(Gender::Male).submit().unwrap();
        let profile = request.profile;

        assert!(!profile.is_diabetic);
        assert!(!profile.has_allergies);
        assert!(!profile.is_fitness_enthusiast);
        assert!(!profile.is_lactose_intolerant);
        assert_eq!(profile.allergies, None);
        assert!(request.missing_ingredients.is_empty());
    }

    #[test]
    fn test_female_conditions_dropped_for_other_genders() {
        for gender in [Gender::Male, Gender::Other] {
            let mut collector = collector(gender);
            collector
                .toggle_condition(HealthCondition::Pregnant)
                .toggle_condition(HealthCondition::Pcos);

            let profile = collector.profile().unwrap();
            assert_eq!(profile.female_conditions, None);
            assert!(!profile.is_pregnant());
            assert!(!profile.has_pcos());

            let json = serde_json::to_value(&profile).unwrap();
            assert!(json.get("female_conditions").is_none());
        }
    }

    #[test]
    fn test_female_conditions_kept_for_female() {
        let mut collector = collector(Gender::Female);
        collector.toggle_condition(HealthCondition::Pcos);

        let profile = collector.profile().unwrap();
        assert_eq!(
            profile.female_conditions,
            Some(FemaleConditions {
                is_pregnant: false,
                has_pcos: true,
            })
        );
    }

    #[test]
    fn test_switching_gender_discards_earlier_answers() {
        let mut collector = collector(Gender::Female);
        collector.toggle_condition(HealthCondition::Pregnant);
        collector.set_gender(Gender::Male);

        assert_eq!(collector.profile().unwrap().female_conditions, None);
    }

    #[test]
    fn test_allergy_text_only_kept_when_checked() {
        let mut collector = collector(Gender::Other);
        collector.set_allergy_text("peanuts");
        assert_eq!(collector.profile().unwrap().allergies, None);

        collector.toggle_condition(HealthCondition::Allergies);
        assert_eq!(
            collector.profile().unwrap().allergies.as_deref(),
            Some("peanuts")
        );
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let mut collector = collector(Gender::Male);
        collector
            .toggle_condition(HealthCondition::Diabetic)
            .toggle_condition(HealthCondition::Diabetic);
        assert!(!collector.is_checked(HealthCondition::Diabetic));

        collector.set_condition(HealthCondition::Diabetic, true);
        collector.set_condition(HealthCondition::Diabetic, true);
        assert!(collector.is_checked(HealthCondition::Diabetic));
    }

    #[test]
    fn test_submit_requires_name_gender_and_dish() {
        let mut collector = HealthProfileCollector::new();
        assert_eq!(collector.submit(), Err(HealthProfileError::MissingName));

        collector.set_name("   ");
        assert_eq!(collector.submit(), Err(HealthProfileError::MissingName));

        collector.set_name("Sam");
        assert_eq!(collector.submit(), Err(HealthProfileError::MissingGender));

        collector.set_gender(Gender::Other);
        assert_eq!(collector.submit(), Err(HealthProfileError::MissingDishName));

        collector.set_dish_name("  Pad Thai ");
        let request = collector.submit().unwrap();
        assert_eq!(request.dish_name, "Pad Thai");
        assert_eq!(request.profile.name, "Sam");
    }
}
