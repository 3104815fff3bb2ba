use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "medical_conditions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// `{nutrient: "low" | "medium" | "high"}`
    #[sea_orm(column_type = "JsonBinary")]
    pub recommended_nutrients: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_medical_conditions::Entity")]
    UserMedicalConditions,
}

impl Related<super::user_medical_conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMedicalConditions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
