use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::{LLMClient, RecipeGenerator},
    health::ports::HealthCheckRepository,
    medical_condition::ports::MedicalConditionRepository,
    recipe::{
        entities::{Favorite, FavoriteRecipe, Recipe, RecipeDetail, RecommendationHistoryEntry},
        ports::{FavoriteRepository, RecipeRepository, RecipeService, RecommendationLogRepository},
        value_objects::{
            DEFAULT_HISTORY_LIMIT, FavoriteInput, GetRecipeInput, GetRecommendationHistoryInput,
            MAX_SEARCH_LIMIT, SearchRecipesInput,
        },
    },
    user::ports::{UserConditionRepository, UserRepository},
};

impl<U, UC, MC, R, F, RL, G, L, HC> RecipeService for Service<U, UC, MC, R, F, RL, G, L, HC>
where
    U: UserRepository,
    UC: UserConditionRepository,
    MC: MedicalConditionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    RL: RecommendationLogRepository,
    G: RecipeGenerator,
    L: LLMClient,
    HC: HealthCheckRepository,
{
    async fn search_recipes(&self, input: SearchRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        let tags = input.tag_list();
        if !tags.is_empty() {
            return self.recipe_repository.get_by_tags(tags).await;
        }

        let limit = input.limit();
        match input.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(term) => self.recipe_repository.search(term.to_string(), limit).await,
            None => {
                self.recipe_repository
                    .get_all(limit, input.offset.unwrap_or(0))
                    .await
            }
        }
    }

    async fn get_recipe(&self, input: GetRecipeInput) -> Result<RecipeDetail, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Recipe not found".to_string()))?;

        let is_favorited = match input.user_id {
            Some(user_id) => {
                self.favorite_repository
                    .is_favorited(user_id, recipe.id)
                    .await?
            }
            None => false,
        };

        Ok(RecipeDetail {
            recipe,
            is_favorited,
        })
    }

    async fn add_favorite(&self, input: FavoriteInput) -> Result<Favorite, CoreError> {
        let (user_id, recipe_id) = input.user_id.zip(input.recipe_id).ok_or_else(|| {
            CoreError::Validation("userId and recipeId are required".to_string())
        })?;

        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Recipe not found".to_string()))?;

        let favorite = self
            .favorite_repository
            .add_favorite(Favorite::new(user_id, recipe_id))
            .await?;

        info!(user_id = %user_id, recipe_id = %recipe_id, "Recipe favorited");

        Ok(favorite)
    }

    async fn remove_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> Result<(), CoreError> {
        self.favorite_repository
            .remove_favorite(user_id, recipe_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Favorite not found".to_string()))?;

        Ok(())
    }

    async fn get_favorites(&self, user_id: Uuid) -> Result<Vec<FavoriteRecipe>, CoreError> {
        self.favorite_repository.get_user_favorites(user_id).await
    }

    async fn get_recommendation_history(
        &self,
        input: GetRecommendationHistoryInput,
    ) -> Result<Vec<RecommendationHistoryEntry>, CoreError> {
        let limit = input
            .limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);

        self.recommendation_log_repository
            .get_user_recommendations(input.user_id, limit)
            .await
    }
}
