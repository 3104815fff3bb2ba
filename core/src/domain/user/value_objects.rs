use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::user::entities::Severity;

pub struct CreateUserInput {
    pub email: String,
    pub name: String,
}

pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct AddUserConditionInput {
    pub user_id: Uuid,
    pub condition_id: Option<Uuid>,
    pub severity: Option<Severity>,
    pub diagnosed_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

pub struct RemoveUserConditionInput {
    pub user_id: Uuid,
    pub condition_id: Uuid,
}
