use sea_orm::sea_query::{
    Expr,
    extension::postgres::{PgBinOper, PgExpr},
};
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::NutrientProfile,
    recipe::{
        entities::{Recipe, RecipeDraft},
        ports::RecipeRepository,
        value_objects::TAG_MATCH_LIMIT,
    },
};
use crate::entity::recipes::{
    ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `tags @> '["tag"]'`: the recipe carries every tag in `tags`.
fn tags_contain(tags: &[String]) -> sea_orm::sea_query::SimpleExpr {
    Expr::col(RecipeColumn::Tags).binary(PgBinOper::Contains, Expr::val(serde_json::json!(tags)))
}

/// Recipes carrying at least one `{nutrient}-rich` tag for a high-priority
/// nutrient. `None` when the profile has no high-priority nutrient.
fn nutrient_tag_query(profile: &NutrientProfile) -> Option<Select<RecipeEntity>> {
    let tags = profile.high_priority_tags();
    if tags.is_empty() {
        return None;
    }

    let any_tag = tags.iter().fold(Condition::any(), |condition, tag| {
        condition.add(tags_contain(std::slice::from_ref(tag)))
    });

    Some(
        RecipeEntity::find()
            .filter(any_tag)
            .order_by_desc(RecipeColumn::CreatedAt)
            .limit(TAG_MATCH_LIMIT),
    )
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, CoreError> {
        let recipe = Recipe::from_draft(draft);

        RecipeEntity::insert(RecipeActiveModel::from(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map(Recipe::from)
            .map_err(|e| {
                error!(title = %recipe.title, "Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = RecipeEntity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }

    async fn find_by_nutrient_tags(
        &self,
        profile: NutrientProfile,
    ) -> Result<Vec<Recipe>, CoreError> {
        let Some(query) = nutrient_tag_query(&profile) else {
            return Ok(vec![]);
        };

        let recipes = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find recipes by nutrient tags: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Recipe::from)
            .collect();

        Ok(recipes)
    }

    async fn get_by_tags(&self, tags: Vec<String>) -> Result<Vec<Recipe>, CoreError> {
        let recipes = RecipeEntity::find()
            .filter(tags_contain(&tags))
            .order_by_desc(RecipeColumn::CreatedAt)
            .limit(TAG_MATCH_LIMIT)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipes by tags: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Recipe::from)
            .collect();

        Ok(recipes)
    }

    async fn search(&self, term: String, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        let pattern = format!("%{}%", term);

        let recipes = RecipeEntity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(RecipeColumn::Title).ilike(pattern.clone()))
                    .add(Expr::col(RecipeColumn::Description).ilike(pattern)),
            )
            .order_by_desc(RecipeColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search recipes: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Recipe::from)
            .collect();

        Ok(recipes)
    }

    async fn get_all(&self, limit: u64, offset: u64) -> Result<Vec<Recipe>, CoreError> {
        let recipes = RecipeEntity::find()
            .order_by_desc(RecipeColumn::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Recipe::from)
            .collect();

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::domain::nutrition::{NutrientMap, NutrientPriority};

    fn profile(entries: &[(&str, NutrientPriority)]) -> NutrientProfile {
        NutrientProfile::new(
            entries
                .iter()
                .map(|(n, p)| (n.to_string(), *p))
                .collect::<NutrientMap>(),
        )
    }

    #[test]
    fn test_nutrient_query_matches_any_high_tag_newest_first() {
        let query = nutrient_tag_query(&profile(&[
            ("sodium", NutrientPriority::High),
            ("sugar", NutrientPriority::High),
            ("fiber", NutrientPriority::Medium),
        ]))
        .unwrap();

        let sql = query.build(DbBackend::Postgres).to_string();

        assert!(sql.contains(r#""tags" @> "#), "{sql}");
        assert!(sql.contains("sodium-rich"), "{sql}");
        assert!(sql.contains("sugar-rich"), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
        assert!(!sql.contains("fiber-rich"), "{sql}");
        assert!(sql.contains(r#"ORDER BY "recipes"."created_at" DESC"#), "{sql}");
        assert!(sql.ends_with("LIMIT 20"), "{sql}");
    }

    #[test]
    fn test_nutrient_query_needs_a_high_priority() {
        assert!(nutrient_tag_query(&NutrientProfile::default()).is_none());
        assert!(
            nutrient_tag_query(&profile(&[
                ("fiber", NutrientPriority::Medium),
                ("fat", NutrientPriority::Low),
            ]))
            .is_none()
        );
    }
}
