use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::recipe::entities::{Favorite, Recipe, RecommendationLog};
use crate::entity::{
    recipe_recommendations::Model as RecommendationModel,
    recipes::{ActiveModel as RecipeActiveModel, Model as RecipeModel},
    user_favorites::Model as FavoriteModel,
};

fn json_or_default<T: DeserializeOwned + Default>(value: serde_json::Value, field: &str) -> T {
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(field, "Unreadable JSON column: {}", e);
        T::default()
    })
}

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Recipe {
            id: model.id,
            title: model.title,
            description: model.description,
            ingredients: json_or_default(model.ingredients, "ingredients"),
            instructions: json_or_default(model.instructions, "instructions"),
            nutritional_info: json_or_default(model.nutritional_info, "nutritional_info"),
            prep_time: model.prep_time,
            cook_time: model.cook_time,
            servings: model.servings,
            difficulty: model.difficulty.parse().unwrap_or_default(),
            tags: json_or_default(model.tags, "tags"),
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

impl From<&Recipe> for RecipeActiveModel {
    fn from(recipe: &Recipe) -> Self {
        RecipeActiveModel {
            id: Set(recipe.id),
            title: Set(recipe.title.clone()),
            description: Set(recipe.description.clone()),
            ingredients: Set(serde_json::to_value(&recipe.ingredients).unwrap_or_default()),
            instructions: Set(serde_json::to_value(&recipe.instructions).unwrap_or_default()),
            nutritional_info: Set(serde_json::Value::Object(recipe.nutritional_info.clone())),
            prep_time: Set(recipe.prep_time),
            cook_time: Set(recipe.cook_time),
            servings: Set(recipe.servings),
            difficulty: Set(recipe.difficulty.to_string()),
            tags: Set(serde_json::to_value(&recipe.tags).unwrap_or_default()),
            created_at: Set(recipe.created_at.naive_utc()),
        }
    }
}

impl From<FavoriteModel> for Favorite {
    fn from(model: FavoriteModel) -> Self {
        Favorite {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

impl From<RecommendationModel> for RecommendationLog {
    fn from(model: RecommendationModel) -> Self {
        RecommendationLog {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            matched_conditions: json_or_default(model.matched_conditions, "matched_conditions"),
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::Difficulty;

    fn model() -> RecipeModel {
        RecipeModel {
            id: uuid::Uuid::nil(),
            title: "Lentil Soup".to_string(),
            description: String::new(),
            ingredients: serde_json::json!([{"item": "lentils", "quantity": "1 cup"}]),
            instructions: serde_json::json!(["Simmer"]),
            nutritional_info: serde_json::json!({"fiber": "high"}),
            prep_time: 5,
            cook_time: 30,
            servings: 4,
            difficulty: "hard".to_string(),
            tags: serde_json::json!(["fiber-rich"]),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_model_maps_json_columns() {
        let recipe = Recipe::from(model());

        assert_eq!(recipe.ingredients[0].item, "lentils");
        assert_eq!(recipe.instructions, vec!["Simmer".to_string()]);
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert_eq!(recipe.tags, vec!["fiber-rich".to_string()]);
    }

    #[test]
    fn test_malformed_tags_become_empty() {
        let recipe = Recipe::from(RecipeModel {
            tags: serde_json::json!("not-an-array"),
            difficulty: "unknown".to_string(),
            ..model()
        });

        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.difficulty, Difficulty::Medium);
    }
}
