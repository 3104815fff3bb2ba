use crate::application::http::{
    chat::router::ChatApiDoc, favorite::router::FavoriteApiDoc, health::router::HealthApiDoc,
    medical_condition::router::MedicalConditionApiDoc, recipe::router::RecipeApiDoc,
    recommendation::router::RecommendationApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nourish API",
        description = "Condition-aware recipe recommendations"
    ),
    nest(
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/favorites", api = FavoriteApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/medical-conditions", api = MedicalConditionApiDoc),
        (path = "/chat", api = ChatApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
