use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::NutrientProfile,
    recipe::{
        entities::{
            Favorite, FavoriteRecipe, Recipe, RecipeDetail, RecipeDraft,
            RecommendationHistoryEntry, RecommendationLog,
        },
        value_objects::{
            FavoriteInput, GetRecipeInput, GetRecommendationHistoryInput, SearchRecipesInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create(&self, draft: RecipeDraft) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Recipes tagged `{nutrient}-rich` for at least one nutrient the profile
    /// marks `high`, newest first, capped at 20. Empty when nothing is `high`.
    fn find_by_nutrient_tags(
        &self,
        profile: NutrientProfile,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Recipes carrying every tag in `tags`, newest first, capped at 20.
    fn get_by_tags(
        &self,
        tags: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn search(
        &self,
        term: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    /// Idempotent: a repeated pair returns the row that already exists.
    fn add_favorite(
        &self,
        favorite: Favorite,
    ) -> impl Future<Output = Result<Favorite, CoreError>> + Send;

    fn remove_favorite(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Favorite>, CoreError>> + Send;

    fn get_user_favorites(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FavoriteRecipe>, CoreError>> + Send;

    fn is_favorited(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationLogRepository: Send + Sync {
    fn log_recommendation(
        &self,
        log: RecommendationLog,
    ) -> impl Future<Output = Result<RecommendationLog, CoreError>> + Send;

    fn get_user_recommendations(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<RecommendationHistoryEntry>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn add_favorite(
        &self,
        input: FavoriteInput,
    ) -> impl Future<Output = Result<Favorite, CoreError>> + Send;

    fn remove_favorite(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_favorites(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FavoriteRecipe>, CoreError>> + Send;

    fn get_recommendation_history(
        &self,
        input: GetRecommendationHistoryInput,
    ) -> impl Future<Output = Result<Vec<RecommendationHistoryEntry>, CoreError>> + Send;
}
