use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::{context::RequestContext, entities::app_errors::CoreError},
    recommendation::entities::RecommendationSet,
};

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    /// Fails with `NoConditions` when the user has no medical conditions and
    /// with `GenerationFailure` when the generator gives up.
    fn get_recommendations(
        &self,
        ctx: RequestContext,
        user_id: Uuid,
    ) -> impl Future<Output = Result<RecommendationSet, CoreError>> + Send;
}
