use serde_json::json;

/// Response schema handed to the model for recipe generation.
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "description": { "type": "string" },
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "item": { "type": "string" },
                            "quantity": { "type": "number" },
                            "unit": { "type": "string" }
                        },
                        "required": ["item", "quantity", "unit"]
                    }
                },
                "instructions": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "nutritional_info": {
                    "type": "object",
                    "properties": {
                        "calories": { "type": "number" },
                        "protein": { "type": "string" },
                        "carbs": { "type": "string" },
                        "fat": { "type": "string" },
                        "fiber": { "type": "string" }
                    }
                },
                "prep_time": { "type": "integer" },
                "cook_time": { "type": "integer" },
                "servings": { "type": "integer" },
                "difficulty": {
                    "type": "string",
                    "enum": ["easy", "medium", "hard"]
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": [
                "title", "description", "ingredients", "instructions",
                "nutritional_info", "prep_time", "cook_time", "servings",
                "difficulty", "tags"
            ]
        }
    })
}
