use std::future::Future;

use crate::domain::{
    chat::entities::CookingAssistanceInput,
    common::{context::RequestContext, entities::app_errors::CoreError},
    generation::entities::ChatMessage,
};

#[cfg_attr(test, mockall::automock)]
pub trait CookingAssistantService: Send + Sync {
    fn get_cooking_assistance(
        &self,
        ctx: RequestContext,
        input: CookingAssistanceInput,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;
}
