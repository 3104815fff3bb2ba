use axum::extract::State;
use nourish_core::domain::{
    chat::{entities::CookingAssistanceInput, ports::CookingAssistantService},
    generation::entities::ChatMessage,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    context::Ctx,
    http::{
        chat::validators::ChatValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub success: bool,
    pub message: ChatMessage,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Ask the cooking assistant",
    description = "Answers the latest user message in the context of the recipe being cooked.",
    request_body = ChatValidator,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, body = ApiErrorResponse, description = "Empty conversation, missing recipe title or last message not from the user"),
        (status = 502, body = ApiErrorResponse, description = "The assistant did not answer")
    )
)]
pub async fn get_cooking_assistance(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    let message = state
        .service
        .get_cooking_assistance(
            ctx,
            CookingAssistanceInput {
                messages: payload.messages,
                recipe_context: payload.recipe_context,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse {
        success: true,
        message,
    }))
}
