use crate::domain::{health_profile::entities::HealthProfile, recipe::entities::EnrichmentRequest};

/// Short phrases describing the profile's conditions, in a fixed order so
/// identical profiles always produce the same prompt.
pub fn conditions_for(profile: &HealthProfile) -> Vec<String> {
    let mut conditions = Vec::new();

    if profile.is_diabetic {
        conditions.push("diabetic".to_string());
    }
    if profile.is_lactose_intolerant {
        conditions.push("lactose intolerant".to_string());
    }
    if profile.is_fitness_enthusiast {
        conditions.push("fitness focused".to_string());
    }
    if profile.has_allergies {
        match profile.allergies.as_deref().map(str::trim) {
            Some(allergies) if !allergies.is_empty() => {
                conditions.push(format!("allergic to {allergies}"))
            }
            _ => conditions.push("has food allergies".to_string()),
        }
    }
    if profile.is_pregnant() {
        conditions.push("pregnant".to_string());
    }
    if profile.has_pcos() {
        conditions.push("has PCOS".to_string());
    }

    conditions
}

const RESPONSE_FORMAT: &str = r#"{
  "ingredients": ["ingredient1", "ingredient2"],
  "substitutions": [{"original": "ingredient", "substitute": "healthy alternative"}],
  "pairings": [{"name": "pairing name", "description": "why it pairs well"}],
  "nutrition": {
    "calories": "amount per serving",
    "protein": "amount per serving",
    "carbs": "amount per serving",
    "fat": "amount per serving",
    "benefits": ["health benefit 1", "health benefit 2"]
  }
}"#;

pub fn build_recipe_prompt(request: &EnrichmentRequest) -> String {
    let conditions = conditions_for(&request.profile);
    let conditions = if conditions.is_empty() {
        "none".to_string()
    } else {
        conditions.join(", ")
    };

    let mut prompt = format!(
        "For the recipe \"{}\", provide:\n\
         1. A list of traditional ingredients\n\
         2. Healthy substitutions considering these health conditions: {}\n\
         3. Exactly three complementary food pairings that would go well with this dish\n\
         4. Detailed nutritional information and health benefits",
        request.dish_name, conditions
    );

    if !request.missing_ingredients.is_empty() {
        prompt.push_str(&format!(
            "\n5. Substitutions for these missing ingredients: {}",
            request.missing_ingredients.join(", ")
        ));
    }

    prompt.push_str("\n\nRespond with JSON only, using exactly this structure:\n");
    prompt.push_str(RESPONSE_FORMAT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::health_profile::entities::{FemaleConditions, Gender};

    fn profile() -> HealthProfile {
        HealthProfile::new("Alex".to_string(), Gender::Female)
    }

    #[test]
    fn test_conditions_follow_fixed_order() {
        let mut profile = profile();
        profile.has_allergies = true;
        profile.allergies = Some("peanuts".to_string());
        profile.is_fitness_enthusiast = true;
        profile.is_lactose_intolerant = true;
        profile.is_diabetic = true;
        profile.female_conditions = Some(FemaleConditions {
            is_pregnant: true,
            has_pcos: true,
        });

        assert_eq!(
            conditions_for(&profile),
            vec![
                "diabetic",
                "lactose intolerant",
                "fitness focused",
                "allergic to peanuts",
                "pregnant",
                "has PCOS",
            ]
        );
    }

    #[test]
    fn test_blank_allergy_text() {
        let mut profile = profile();
        profile.has_allergies = true;
        profile.allergies = Some("  ".to_string());

        assert_eq!(conditions_for(&profile), vec!["has food allergies"]);
    }

    #[test]
    fn test_prompt_mentions_dish_and_conditions() {
        let mut profile = profile();
        profile.is_diabetic = true;
        let request = EnrichmentRequest::new("Chocolate Cake".to_string(), profile);

        let prompt = build_recipe_prompt(&request);
        assert!(prompt.contains("\"Chocolate Cake\""));
        assert!(prompt.contains("health conditions: diabetic"));
        assert!(prompt.contains("\"pairings\""));
        assert!(!prompt.contains("missing ingredients"));
    }

    #[test]
    fn test_prompt_without_conditions() {
        let request = EnrichmentRequest::new("Ramen".to_string(), profile());
        assert!(build_recipe_prompt(&request).contains("health conditions: none"));
    }

    #[test]
    fn test_prompt_lists_missing_ingredients() {
        let mut request = EnrichmentRequest::new("Pancakes".to_string(), profile());
        request.missing_ingredients = vec!["butter".to_string(), "eggs".to_string()];

        let prompt = build_recipe_prompt(&request);
        assert!(prompt.contains("missing ingredients: butter, eggs"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = EnrichmentRequest::new("Tacos".to_string(), profile());
        assert_eq!(build_recipe_prompt(&request), build_recipe_prompt(&request));
    }
}
