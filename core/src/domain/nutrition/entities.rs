use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How strongly a nutrient should be emphasized for a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NutrientPriority {
    Low,
    Medium,
    High,
}

impl NutrientPriority {
    /// Ordinal used when merging priorities; an absent nutrient ranks 0.
    pub fn rank(self) -> u8 {
        match self {
            NutrientPriority::Low => 1,
            NutrientPriority::Medium => 2,
            NutrientPriority::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NutrientPriority::Low => "low",
            NutrientPriority::Medium => "medium",
            NutrientPriority::High => "high",
        }
    }
}

impl fmt::Display for NutrientPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutrientPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(NutrientPriority::Low),
            "medium" => Ok(NutrientPriority::Medium),
            "high" => Ok(NutrientPriority::High),
            _ => Err(()),
        }
    }
}

pub type NutrientMap = BTreeMap<String, NutrientPriority>;

/// Merged nutrient priorities for one user, derived from their conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct NutrientProfile(NutrientMap);

impl NutrientProfile {
    pub fn new(nutrients: NutrientMap) -> Self {
        Self(nutrients)
    }

    pub fn get(&self, nutrient: &str) -> Option<NutrientPriority> {
        self.0.get(nutrient).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NutrientPriority)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &NutrientMap {
        &self.0
    }

    /// Nutrients whose merged priority is exactly `high`.
    pub fn high_priority_nutrients(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, priority)| **priority == NutrientPriority::High)
            .map(|(nutrient, _)| nutrient.clone())
            .collect()
    }

    /// `{nutrient}-rich` tags for the high-priority nutrients.
    pub fn high_priority_tags(&self) -> Vec<String> {
        self.high_priority_nutrients()
            .iter()
            .map(|nutrient| super::helpers::nutrient_tag(nutrient))
            .collect()
    }
}

impl From<NutrientMap> for NutrientProfile {
    fn from(map: NutrientMap) -> Self {
        Self(map)
    }
}
