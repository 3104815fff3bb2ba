use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteValidator {
    #[serde(default)]
    pub user_id: Option<Uuid>,

    #[serde(default)]
    pub recipe_id: Option<Uuid>,
}
