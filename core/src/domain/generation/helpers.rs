use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::entities::GenerationRequest,
    recipe::entities::{Difficulty, Ingredient, RecipeDraft},
};

const DEFAULT_SERVINGS: i32 = 4;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*").expect("valid code fence pattern"));

pub fn build_recipe_prompt(request: &GenerationRequest) -> String {
    let condition_names = request
        .conditions
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let nutrient_list = request
        .profile
        .iter()
        .map(|(nutrient, priority)| format!("{} ({} priority)", nutrient, priority))
        .collect::<Vec<_>>()
        .join(", ");

    let tag_hint = if request.target_tags.is_empty() {
        String::new()
    } else {
        format!(
            "\n- Include every applicable tag from this list in \"tags\": {}",
            request.target_tags.join(", ")
        )
    };

    format!(
        r#"You are a professional nutritionist and chef. Generate {count} healthy, delicious recipes for someone with the following medical conditions: {condition_names}.

Their nutritional requirements are: {nutrient_list}

Return a JSON array where every element has exactly these fields:
title, description (2-3 sentences), ingredients (array of {{"item", "quantity", "unit"}}),
instructions (array of steps), nutritional_info (object), prep_time (minutes),
cook_time (minutes), servings, difficulty, tags (array of strings).

IMPORTANT:
- Return ONLY valid JSON, no extra text or fields
- Use lowercase for difficulty: "easy", "medium", or "hard"
- Use lowercase for nutritional levels: "high", "medium", or "low"
- Make recipes practical with common ingredients
- Ensure quantities are numbers, not strings{tag_hint}"#,
        count = request.count,
    )
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawIngredient {
    Structured(Ingredient),
    Plain(String),
}

impl From<RawIngredient> for Ingredient {
    fn from(raw: RawIngredient) -> Self {
        match raw {
            RawIngredient::Structured(ingredient) => ingredient,
            RawIngredient::Plain(item) => Ingredient {
                item,
                quantity: None,
                unit: None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRecipe {
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ingredients: Vec<RawIngredient>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default, alias = "nutritionalInfo")]
    nutritional_info: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, alias = "prepTime")]
    prep_time: Option<serde_json::Value>,
    #[serde(default, alias = "cookTime")]
    cook_time: Option<serde_json::Value>,
    #[serde(default)]
    servings: Option<serde_json::Value>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// Reads a whole number from a JSON number or a string like "15 minutes".
fn coerce_int(value: Option<&serde_json::Value>) -> Option<i32> {
    match value? {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .and_then(|n| i32::try_from(n).ok()),
        serde_json::Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

impl RawRecipe {
    fn into_draft(self) -> Option<RecipeDraft> {
        let title = self.title.map(|t| t.trim().to_string())?;
        if title.is_empty() {
            return None;
        }

        let servings = coerce_int(self.servings.as_ref())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_SERVINGS);

        let difficulty = self
            .difficulty
            .and_then(|d| d.parse::<Difficulty>().ok())
            .unwrap_or_default();

        Some(RecipeDraft {
            title,
            description: self.description.unwrap_or_default(),
            ingredients: self.ingredients.into_iter().map(Ingredient::from).collect(),
            instructions: self.instructions,
            nutritional_info: self.nutritional_info.unwrap_or_default(),
            prep_time: coerce_int(self.prep_time.as_ref()).unwrap_or(0).max(0),
            cook_time: coerce_int(self.cook_time.as_ref()).unwrap_or(0).max(0),
            servings,
            difficulty,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

/// Converts raw model output into at most `count` canonical drafts.
///
/// Elements that are not recipe-shaped are skipped; output without a JSON
/// array is an error.
pub fn parse_recipe_drafts(raw: &str, count: usize) -> Result<Vec<RecipeDraft>, CoreError> {
    let cleaned = CODE_FENCE.replace_all(raw.trim(), "");

    let start = cleaned.find('[');
    let end = cleaned.rfind(']');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &cleaned[start..=end],
        _ => {
            return Err(CoreError::ExternalServiceError(
                "No valid JSON array found in response".to_string(),
            ));
        }
    };

    let items: Vec<serde_json::Value> = serde_json::from_str(json).map_err(|e| {
        CoreError::ExternalServiceError(format!("Failed to parse recipe JSON: {}", e))
    })?;

    let drafts = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RawRecipe>(item) {
            Ok(raw) => raw.into_draft(),
            Err(e) => {
                warn!("Skipping malformed generated recipe: {}", e);
                None
            }
        })
        .take(count)
        .collect();

    Ok(drafts)
}
