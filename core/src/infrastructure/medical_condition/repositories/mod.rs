pub mod medical_condition_repository;
