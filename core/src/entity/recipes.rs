use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub instructions: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub nutritional_info: Json,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: String,
    /// JSON array of strings, GIN indexed.
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorites::Entity")]
    UserFavorites,
    #[sea_orm(has_many = "super::recipe_recommendations::Entity")]
    RecipeRecommendations,
}

impl Related<super::user_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavorites.def()
    }
}

impl Related<super::recipe_recommendations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeRecommendations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
