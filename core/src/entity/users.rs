use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_medical_conditions::Entity")]
    UserMedicalConditions,
    #[sea_orm(has_many = "super::user_favorites::Entity")]
    UserFavorites,
    #[sea_orm(has_many = "super::recipe_recommendations::Entity")]
    RecipeRecommendations,
}

impl Related<super::user_medical_conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMedicalConditions.def()
    }
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
