use crate::domain::{health_profile::entities::HealthProfile, recipe::entities::EnrichmentRequest};

/// One pass through the recipe screen: a dish for a profile, plus the
/// ingredients the user reported missing so far.
///
/// The missing ingredient list only ever grows. Each call to
/// [`RecipeSession::request`] yields a fresh request that is meant to be
/// enriched from scratch, replacing the previous result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSession {
    dish_name: String,
    profile: HealthProfile,
    missing_ingredients: Vec<String>,
}

impl RecipeSession {
    pub fn new(request: EnrichmentRequest) -> Self {
        let mut session = Self {
            dish_name: request.dish_name,
            profile: request.profile,
            missing_ingredients: Vec::new(),
        };
        for ingredient in request.missing_ingredients {
            session.add_missing_ingredient(ingredient);
        }
        session
    }

    /// Records a missing ingredient. Blank entries and repeats (ignoring
    /// case) are skipped, so a repeated hint is never sent to the model a
    /// second time. Returns whether the list changed.
    pub fn add_missing_ingredient(&mut self, ingredient: impl AsRef<str>) -> bool {
        let ingredient = ingredient.as_ref().trim();
        if ingredient.is_empty() {
            return false;
        }

        let already_listed = self
            .missing_ingredients
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ingredient));
        if already_listed {
            return false;
        }

        self.missing_ingredients.push(ingredient.to_string());
        true
    }

    pub fn missing_ingredients(&self) -> &[String] {
        &self.missing_ingredients
    }

    pub fn request(&self) -> EnrichmentRequest {
        EnrichmentRequest {
            dish_name: self.dish_name.clone(),
            profile: self.profile.clone(),
            missing_ingredients: self.missing_ingredients.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::health_profile::entities::Gender;

    fn session() -> RecipeSession {
        let profile = HealthProfile::new("Alex".to_string(), Gender::Male);
        RecipeSession::new(EnrichmentRequest::new("Pancakes".to_string(), profile))
    }

    #[test]
    fn test_missing_ingredients_grow() {
        let mut session = session();
        assert!(session.request().missing_ingredients.is_empty());

        assert!(session.add_missing_ingredient(" butter "));
        let first = session.request();
        assert!(session.add_missing_ingredient("eggs"));
        let second = session.request();

        assert_eq!(first.missing_ingredients, vec!["butter"]);
        assert_eq!(second.missing_ingredients, vec!["butter", "eggs"]);
        assert_eq!(second.dish_name, "Pancakes");
    }

    #[test]
    fn test_blank_and_repeated_ingredients_are_ignored() {
        let mut session = session();
        session.add_missing_ingredient("Milk");

        assert!(!session.add_missing_ingredient("   "));
        assert!(!session.add_missing_ingredient("milk"));
        assert_eq!(session.missing_ingredients(), ["Milk".to_string()]);
    }

    #[test]
    fn test_new_normalizes_initial_list() {
        let profile = HealthProfile::new("Alex".to_string(), Gender::Other);
        let mut request = EnrichmentRequest::new("Curry".to_string(), profile);
        request.missing_ingredients = vec![
            "coconut milk".to_string(),
            "".to_string(),
            "Coconut Milk".to_string(),
            " lime".to_string(),
        ];

        let session = RecipeSession::new(request);
        assert_eq!(session.missing_ingredients(), ["coconut milk", "lime"]);
    }
}
