use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    nutrition::{NutrientMap, NutrientProfile},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: Option<String>, email: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            _ => Err(()),
        }
    }
}

/// A condition attached to a user; unique per (user, condition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserCondition {
    pub id: Uuid,
    pub user_id: Uuid,
    pub medical_condition_id: Uuid,
    pub severity: Severity,
    pub diagnosed_at: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserCondition {
    pub fn new(
        user_id: Uuid,
        medical_condition_id: Uuid,
        severity: Severity,
        diagnosed_at: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            medical_condition_id,
            severity,
            diagnosed_at: diagnosed_at.unwrap_or_else(|| now.date_naive()),
            notes,
            created_at: now,
        }
    }
}

/// A user's condition joined with its catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserConditionDetail {
    pub id: Uuid,
    pub severity: Severity,
    pub diagnosed_at: NaiveDate,
    pub notes: Option<String>,
    pub condition_id: Uuid,
    pub condition_name: String,
    pub description: String,
    pub recommended_nutrients: NutrientMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchedCondition {
    pub name: String,
    pub severity: Severity,
}

impl From<&UserConditionDetail> for MatchedCondition {
    fn from(detail: &UserConditionDetail) -> Self {
        Self {
            name: detail.condition_name.clone(),
            severity: detail.severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalNeeds {
    pub conditions: Vec<MatchedCondition>,
    pub nutritional_needs: NutrientProfile,
}

impl NutritionalNeeds {
    pub fn condition_names(&self) -> Vec<String> {
        self.conditions.iter().map(|c| c.name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "medicalConditions")]
    pub medical_conditions: Vec<UserConditionDetail>,
}
