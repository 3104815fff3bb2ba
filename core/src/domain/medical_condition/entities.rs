use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition::NutrientMap};

/// Reference data: a condition and the nutrients it calls for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicalCondition {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub recommended_nutrients: NutrientMap,
    pub created_at: DateTime<Utc>,
}

impl MedicalCondition {
    pub fn new(name: String, description: String, recommended_nutrients: NutrientMap) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            description,
            recommended_nutrients,
            created_at: now,
        }
    }
}
