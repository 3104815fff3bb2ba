use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_medical_conditions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub medical_condition_id: Uuid,
    pub severity: String,
    pub diagnosed_at: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::medical_conditions::Entity",
        from = "Column::MedicalConditionId",
        to = "super::medical_conditions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MedicalConditions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::medical_conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalConditions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
