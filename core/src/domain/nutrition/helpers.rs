use super::entities::{NutrientMap, NutrientProfile};

/// Catalog tag for recipes rich in `nutrient`.
pub fn nutrient_tag(nutrient: &str) -> String {
    format!("{}-rich", nutrient)
}

/// Merges the recommended nutrients of several conditions.
///
/// Every nutrient keeps the highest priority any condition gives it
/// (high > medium > low). On equal rank the first value seen stays, which
/// cannot be observed since equal ranks mean equal levels.
pub fn compute_needs<'a, I>(conditions: I) -> NutrientProfile
where
    I: IntoIterator<Item = &'a NutrientMap>,
{
    let mut aggregated = NutrientMap::new();

    for nutrients in conditions {
        for (nutrient, priority) in nutrients {
            let current = aggregated.get(nutrient).map(|p| p.rank()).unwrap_or(0);
            if priority.rank() > current {
                aggregated.insert(nutrient.clone(), *priority);
            }
        }
    }

    NutrientProfile::new(aggregated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::NutrientPriority::{self, High, Low, Medium};

    fn map(entries: &[(&str, NutrientPriority)]) -> NutrientMap {
        entries
            .iter()
            .map(|(name, priority)| (name.to_string(), *priority))
            .collect()
    }

    #[test]
    fn test_empty_conditions_yield_empty_profile() {
        let profile = compute_needs(Vec::<&NutrientMap>::new());
        assert!(profile.is_empty());
        assert!(profile.high_priority_tags().is_empty());
    }

    #[test]
    fn test_diabetes_and_hypertension_keep_highest_priority() {
        let diabetes = map(&[("sugar", High)]);
        let hypertension = map(&[("sodium", High), ("sugar", Medium)]);

        let profile = compute_needs([&diabetes, &hypertension]);

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get("sugar"), Some(High));
        assert_eq!(profile.get("sodium"), Some(High));
    }

    #[test]
    fn test_value_is_max_over_contributing_conditions() {
        let a = map(&[("fiber", Low), ("iron", Medium)]);
        let b = map(&[("fiber", Medium), ("calcium", Low)]);
        let c = map(&[("iron", Low)]);

        let profile = compute_needs([&a, &b, &c]);

        assert_eq!(profile.get("fiber"), Some(Medium));
        assert_eq!(profile.get("iron"), Some(Medium));
        assert_eq!(profile.get("calcium"), Some(Low));
        assert_eq!(profile.get("sodium"), None);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let conditions = [
            map(&[("sugar", High), ("fiber", Low)]),
            map(&[("sodium", High), ("sugar", Medium)]),
            map(&[("fiber", Medium), ("potassium", Low)]),
        ];

        let expected = compute_needs(conditions.iter());
        let orders = [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let permuted = order.iter().map(|i| &conditions[*i]);
            assert_eq!(compute_needs(permuted), expected, "order {:?}", order);
        }
    }

    #[test]
    fn test_high_priority_tags_only_cover_high_nutrients() {
        let profile = compute_needs([&map(&[
            ("omega-3", High),
            ("fiber", Medium),
            ("vitamin_d", High),
            ("sodium", Low),
        ])]);

        assert_eq!(
            profile.high_priority_tags(),
            vec!["omega-3-rich".to_string(), "vitamin_d-rich".to_string()]
        );
    }

    #[test]
    fn test_profile_serializes_as_flat_map() {
        let profile = compute_needs([&map(&[("sugar", High), ("fiber", Low)])]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({ "fiber": "low", "sugar": "high" }));
    }
}
