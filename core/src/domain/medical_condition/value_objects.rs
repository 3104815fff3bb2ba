use crate::domain::nutrition::NutrientMap;

pub struct CreateMedicalConditionInput {
    pub name: String,
    pub description: String,
    pub recommended_nutrients: NutrientMap,
}
