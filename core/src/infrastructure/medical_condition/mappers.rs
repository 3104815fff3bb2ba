use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::domain::{
    medical_condition::entities::MedicalCondition,
    nutrition::{NutrientMap, NutrientPriority},
};
use crate::entity::medical_conditions::Model as MedicalConditionModel;

/// Reads a `{nutrient: priority}` JSON object, dropping unknown levels.
pub fn nutrient_map_from_json(value: &serde_json::Value) -> NutrientMap {
    let Some(object) = value.as_object() else {
        return NutrientMap::new();
    };

    object
        .iter()
        .filter_map(|(nutrient, level)| {
            let priority = level.as_str()?.parse::<NutrientPriority>().ok();
            if priority.is_none() {
                warn!(nutrient = %nutrient, "Ignoring unknown nutrient priority: {}", level);
            }
            Some((nutrient.clone(), priority?))
        })
        .collect()
}

pub fn nutrient_map_to_json(map: &NutrientMap) -> serde_json::Value {
    serde_json::Value::Object(
        map.iter()
            .map(|(nutrient, priority)| (nutrient.clone(), priority.as_str().into()))
            .collect(),
    )
}

impl From<MedicalConditionModel> for MedicalCondition {
    fn from(model: MedicalConditionModel) -> Self {
        MedicalCondition {
            id: model.id,
            recommended_nutrients: nutrient_map_from_json(&model.recommended_nutrients),
            name: model.name,
            description: model.description,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_levels_are_dropped() {
        let map = nutrient_map_from_json(&serde_json::json!({
            "fiber": "high",
            "sugar": "LOW",
            "salt": "extreme",
            "iron": 3
        }));

        assert_eq!(map.len(), 2);
        assert_eq!(map["fiber"], NutrientPriority::High);
        assert_eq!(map["sugar"], NutrientPriority::Low);
    }

    #[test]
    fn test_map_serializes_lowercase_levels() {
        let mut map = NutrientMap::new();
        map.insert("omega3".to_string(), NutrientPriority::Medium);

        assert_eq!(
            nutrient_map_to_json(&map),
            serde_json::json!({"omega3": "medium"})
        );
    }
}
