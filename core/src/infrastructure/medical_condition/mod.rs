pub mod mappers;
pub mod repositories;

pub use repositories::medical_condition_repository::PostgresMedicalConditionRepository;
