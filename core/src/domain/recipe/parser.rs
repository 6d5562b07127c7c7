use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::RecipeDraft};

/// Parses the model's answer. Anything that does not deserialize into a
/// complete [`RecipeDraft`] is rejected as a whole.
pub fn parse_recipe_response(raw: &str) -> Result<RecipeDraft, CoreError> {
    let payload = strip_code_fence(raw);

    serde_json::from_str(payload).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::InvalidResponse(format!("Failed to parse LLM response: {}", e))
    })
}

/// Chat models like to wrap JSON in a Markdown fence even when told not to.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // drop the info string, e.g. ```json, which may sit on the same line as the payload
    let body = if rest.starts_with(['{', '[']) {
        rest
    } else {
        rest.split_once(char::is_whitespace)
            .map(|(_, body)| body)
            .unwrap_or("")
    };
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "ingredients": ["flour", "cocoa"],
        "substitutions": [{"original": "sugar", "substitute": "stevia"}],
        "pairings": [
            {"name": "Berry Compote", "description": "Tart contrast"},
            {"name": "Espresso", "description": "Bitter balance"}
        ],
        "nutrition": {
            "calories": "320 kcal",
            "protein": "5 g",
            "carbs": "40 g",
            "fat": "14 g",
            "benefits": ["Antioxidants from cocoa"]
        }
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let draft = parse_recipe_response(VALID).unwrap();
        assert_eq!(draft.ingredients, vec!["flour", "cocoa"]);
        assert_eq!(draft.substitutions[0].substitute, "stevia");
        assert_eq!(draft.pairings.len(), 2);
        assert_eq!(draft.nutrition.calories, "320 kcal");
    }

    #[test]
    fn test_parse_fenced_response() {
        let fenced = format!("```json\n{VALID}\n```");
        assert_eq!(
            parse_recipe_response(&fenced).unwrap(),
            parse_recipe_response(VALID).unwrap()
        );
    }

    #[test]
    fn test_parse_single_line_fences() {
        let expected = parse_recipe_response(VALID).unwrap();
        let compact = VALID.replace('\n', " ");

        let with_info = format!("```json {compact} ```");
        assert_eq!(parse_recipe_response(&with_info).unwrap(), expected);

        let bare = format!("```{compact}```");
        assert_eq!(parse_recipe_response(&bare).unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let partial = r#"{"ingredients": ["rice"], "substitutions": [], "pairings": []}"#;
        assert!(matches!(
            parse_recipe_response(partial),
            Err(CoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_recipe_response("Sure! Here is your recipe.").is_err());
        assert!(parse_recipe_response("").is_err());
    }
}
