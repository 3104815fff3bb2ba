pub mod get_medical_condition;
pub mod get_medical_conditions;
pub mod search_medical_conditions;
