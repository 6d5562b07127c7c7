use serde_json::json;

/// Returns the JSON schema for recipe LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "substitutions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "original": { "type": "string" },
                        "substitute": { "type": "string" }
                    },
                    "required": ["original", "substitute"]
                }
            },
            "pairings": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["name", "description"]
                }
            },
            "nutrition": {
                "type": "object",
                "properties": {
                    "calories": { "type": "string" },
                    "protein": { "type": "string" },
                    "carbs": { "type": "string" },
                    "fat": { "type": "string" },
                    "benefits": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                },
                "required": ["calories", "protein", "carbs", "fat", "benefits"]
            }
        },
        "required": ["ingredients", "substitutions", "pairings", "nutrition"]
    })
}
