use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Quantity {
    Amount(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub item: String,
    #[serde(default)]
    pub quantity: Option<Quantity>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Recipe content before it is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[schema(value_type = Object)]
    pub nutritional_info: serde_json::Map<String, serde_json::Value>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[schema(value_type = Object)]
    pub nutritional_info: serde_json::Map<String, serde_json::Value>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn from_draft(draft: RecipeDraft) -> Self {
        let (now, timestamp) = generate_timestamp();

        let mut tags: Vec<String> = Vec::with_capacity(draft.tags.len());
        for tag in draft.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self {
            id: Uuid::new_v7(timestamp),
            title: draft.title,
            description: draft.description,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            nutritional_info: draft.nutritional_info,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            difficulty: draft.difficulty,
            tags,
            created_at: now,
        }
    }

    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(rename = "isFavorited")]
    pub is_favorited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, recipe_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_id,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub favorited_at: DateTime<Utc>,
}

/// Append-only record of a recipe shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub matched_conditions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl RecommendationLog {
    pub fn new(user_id: Uuid, recipe_id: Uuid, matched_conditions: Vec<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_id,
            matched_conditions,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationHistoryEntry {
    #[serde(flatten)]
    pub log: RecommendationLog,
    pub recipe_title: String,
    pub recipe_description: String,
}
