use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::NutrientProfile,
    recipe::entities::{Recipe, RecipeDraft, RecommendationLog},
    user::entities::MatchedCondition,
};

/// What a caller receives for a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub recommendations: Vec<Recipe>,
    pub matched_conditions: Vec<MatchedCondition>,
    /// The full merged profile, not only the high-priority subset.
    pub nutritional_needs: NutrientProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedItem<I> {
    pub input: I,
    pub error: CoreError,
}

/// Per-item results of a batch where one failure does not stop the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialBatch<T, I> {
    pub succeeded: Vec<T>,
    pub failed: Vec<FailedItem<I>>,
}

impl<T, I> Default for PartialBatch<T, I> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T, I> PartialBatch<T, I> {
    pub fn record(&mut self, input: I, result: Result<T, CoreError>) {
        match result {
            Ok(item) => self.succeeded.push(item),
            Err(error) => self.failed.push(FailedItem { input, error }),
        }
    }

    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Everything one orchestration run did, including the per-item failures the
/// caller never sees.
#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub set: RecommendationSet,
    /// Matching catalog recipes found before any generation.
    pub pool_size: usize,
    /// Present only when the pool was insufficient and generation ran.
    pub generated: Option<PartialBatch<Recipe, RecipeDraft>>,
    /// Log writes keyed by recipe id.
    pub logs: PartialBatch<RecommendationLog, Uuid>,
}

impl RecommendationOutcome {
    pub fn log_failures(&self) -> &[FailedItem<Uuid>] {
        &self.logs.failed
    }
}
