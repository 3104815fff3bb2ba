use chrono::{TimeZone, Utc};

use crate::domain::user::entities::{User, UserCondition, UserConditionDetail};
use crate::entity::{
    medical_conditions::Model as MedicalConditionModel,
    user_medical_conditions::Model as UserConditionModel, users::Model as UserModel,
};
use crate::infrastructure::medical_condition::mappers::nutrient_map_from_json;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            name: model.name,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<UserConditionModel> for UserCondition {
    fn from(model: UserConditionModel) -> Self {
        UserCondition {
            id: model.id,
            user_id: model.user_id,
            medical_condition_id: model.medical_condition_id,
            severity: model.severity.parse().unwrap_or_default(),
            diagnosed_at: model.diagnosed_at,
            notes: model.notes,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

pub fn to_condition_detail(
    row: UserConditionModel,
    condition: MedicalConditionModel,
) -> UserConditionDetail {
    UserConditionDetail {
        id: row.id,
        severity: row.severity.parse().unwrap_or_default(),
        diagnosed_at: row.diagnosed_at,
        notes: row.notes,
        condition_id: condition.id,
        recommended_nutrients: nutrient_map_from_json(&condition.recommended_nutrients),
        condition_name: condition.name,
        description: condition.description,
    }
}
