use std::sync::Arc;
use std::time::Instant;

use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::domain::{
    common::{context::RequestContext, entities::app_errors::CoreError, services::Service},
    generation::{
        entities::GenerationRequest,
        ports::{LLMClient, RecipeGenerator},
    },
    health::ports::HealthCheckRepository,
    medical_condition::ports::MedicalConditionRepository,
    recipe::{
        entities::{Recipe, RecipeDraft, RecommendationLog},
        ports::{FavoriteRepository, RecipeRepository, RecommendationLogRepository},
    },
    recommendation::{
        entities::{PartialBatch, RecommendationOutcome, RecommendationSet},
        policies::{
            GENERATION_COUNT, LOGGED_EXISTING_LIMIT, MAX_RECOMMENDATIONS, pool_is_sufficient,
        },
        ports::RecommendationService,
    },
    user::{
        entities::NutritionalNeeds,
        ports::{UserConditionRepository, UserRepository},
        services::load_nutritional_needs,
    },
};

/// Coordinates the recommendation pipeline:
/// 1. Resolve the user's conditions and merged nutrient profile
/// 2. Look up catalog recipes tagged for the high-priority nutrients
/// 3. Serve that pool when it is large enough, otherwise generate and persist new recipes
/// 4. Record what was shown in the recommendation log
pub struct RecommendationOrchestrator<UC, R, RL, G> {
    user_condition_repository: Arc<UC>,
    recipe_repository: Arc<R>,
    recommendation_log_repository: Arc<RL>,
    recipe_generator: Arc<G>,
}

impl<UC, R, RL, G> Clone for RecommendationOrchestrator<UC, R, RL, G> {
    fn clone(&self) -> Self {
        Self {
            user_condition_repository: self.user_condition_repository.clone(),
            recipe_repository: self.recipe_repository.clone(),
            recommendation_log_repository: self.recommendation_log_repository.clone(),
            recipe_generator: self.recipe_generator.clone(),
        }
    }
}

impl<UC, R, RL, G> RecommendationOrchestrator<UC, R, RL, G>
where
    UC: UserConditionRepository,
    R: RecipeRepository,
    RL: RecommendationLogRepository,
    G: RecipeGenerator,
{
    pub fn new(
        user_condition_repository: Arc<UC>,
        recipe_repository: Arc<R>,
        recommendation_log_repository: Arc<RL>,
        recipe_generator: Arc<G>,
    ) -> Self {
        Self {
            user_condition_repository,
            recipe_repository,
            recommendation_log_repository,
            recipe_generator,
        }
    }

    /// Runs one recommendation request.
    ///
    /// Profile lookup and generator failures abort the whole request. Failed
    /// recipe inserts and log writes are collected in the outcome instead.
    pub async fn recommend(
        &self,
        ctx: RequestContext,
        user_id: Uuid,
    ) -> Result<RecommendationOutcome, CoreError> {
        let span = info_span!(
            "recommendations",
            trace_id = %ctx.trace_id,
            user_id = %user_id,
            session_id = ctx.session_id.as_deref().unwrap_or("-"),
        );

        self.run(ctx, user_id).instrument(span).await
    }

    async fn run(
        &self,
        ctx: RequestContext,
        user_id: Uuid,
    ) -> Result<RecommendationOutcome, CoreError> {
        let start_time = Instant::now();

        let needs = load_nutritional_needs(self.user_condition_repository.as_ref(), user_id).await?;
        if needs.conditions.is_empty() {
            warn!("User has no medical conditions");
            return Err(CoreError::NoConditions);
        }
        let condition_names = needs.condition_names();

        let mut recipes = self
            .recipe_repository
            .find_by_nutrient_tags(needs.nutritional_needs.clone())
            .await?;
        let pool_size = recipes.len();
        info!(pool_size, "Found matching catalog recipes");

        let mut logs = PartialBatch::default();

        let generated = if pool_is_sufficient(pool_size) {
            for recipe in recipes.iter().take(LOGGED_EXISTING_LIMIT) {
                self.log_recommendation(user_id, recipe.id, &condition_names, &mut logs)
                    .await;
            }
            None
        } else {
            let batch = self
                .generate_and_persist(&ctx, user_id, &needs, &condition_names, &mut logs)
                .await?;
            recipes.extend(batch.succeeded.iter().cloned());
            Some(batch)
        };

        recipes.truncate(MAX_RECOMMENDATIONS);

        info!(
            recommendations = recipes.len(),
            generated = generated.as_ref().map_or(0, |b| b.succeeded.len()),
            log_failures = logs.failed.len(),
            "Recommendations ready in {:.2?}",
            start_time.elapsed()
        );

        Ok(RecommendationOutcome {
            set: RecommendationSet {
                recommendations: recipes,
                matched_conditions: needs.conditions,
                nutritional_needs: needs.nutritional_needs,
            },
            pool_size,
            generated,
            logs,
        })
    }

    async fn generate_and_persist(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        needs: &NutritionalNeeds,
        condition_names: &[String],
        logs: &mut PartialBatch<RecommendationLog, Uuid>,
    ) -> Result<PartialBatch<Recipe, RecipeDraft>, CoreError> {
        let request = GenerationRequest {
            profile: needs.nutritional_needs.clone(),
            conditions: needs.conditions.clone(),
            count: GENERATION_COUNT,
            target_tags: needs.nutritional_needs.high_priority_tags(),
        };

        let drafts = self
            .recipe_generator
            .generate(ctx.clone(), request)
            .await
            .map_err(|e| {
                error!("Recipe generation failed: {}", e);
                match e {
                    CoreError::GenerationFailure(_) => e,
                    other => CoreError::GenerationFailure(other.to_string()),
                }
            })?;

        let mut batch = PartialBatch::default();
        for draft in drafts {
            match self.recipe_repository.create(draft.clone()).await {
                Ok(recipe) => {
                    self.log_recommendation(user_id, recipe.id, condition_names, logs)
                        .await;
                    batch.succeeded.push(recipe);
                }
                Err(e) => {
                    warn!(title = %draft.title, "Skipping generated recipe: {}", e);
                    batch.record(draft, Err(e));
                }
            }
        }

        info!(
            persisted = batch.succeeded.len(),
            failed = batch.failed.len(),
            "Persisted generated recipes"
        );

        Ok(batch)
    }

    async fn log_recommendation(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        condition_names: &[String],
        logs: &mut PartialBatch<RecommendationLog, Uuid>,
    ) {
        let result = self
            .recommendation_log_repository
            .log_recommendation(RecommendationLog::new(
                user_id,
                recipe_id,
                condition_names.to_vec(),
            ))
            .await;

        if let Err(e) = &result {
            warn!(recipe_id = %recipe_id, "Failed to log recommendation: {}", e);
        }
        logs.record(recipe_id, result);
    }
}

impl<U, UC, MC, R, F, RL, G, L, HC> Service<U, UC, MC, R, F, RL, G, L, HC>
where
    UC: UserConditionRepository,
    R: RecipeRepository,
    RL: RecommendationLogRepository,
    G: RecipeGenerator,
{
    pub fn orchestrator(&self) -> RecommendationOrchestrator<UC, R, RL, G> {
        RecommendationOrchestrator::new(
            self.user_condition_repository.clone(),
            self.recipe_repository.clone(),
            self.recommendation_log_repository.clone(),
            self.recipe_generator.clone(),
        )
    }
}

impl<U, UC, MC, R, F, RL, G, L, HC> RecommendationService
    for Service<U, UC, MC, R, F, RL, G, L, HC>
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
    async fn get_recommendations(
        &self,
        ctx: RequestContext,
        user_id: Uuid,
    ) -> Result<RecommendationSet, CoreError> {
        let outcome = self.orchestrator().recommend(ctx, user_id).await?;
        Ok(outcome.set)
    }
}
