use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    medical_condition::{
        entities::MedicalCondition, value_objects::CreateMedicalConditionInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MedicalConditionRepository: Send + Sync {
    /// All conditions ordered by name.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<MedicalCondition>, CoreError>> + Send;

    fn get_by_id(
        &self,
        condition_id: Uuid,
    ) -> impl Future<Output = Result<Option<MedicalCondition>, CoreError>> + Send;

    /// Case-insensitive exact name lookup.
    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<MedicalCondition>, CoreError>> + Send;

    /// Substring match on name or description, ordered by name.
    fn search(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<MedicalCondition>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateMedicalConditionInput,
    ) -> impl Future<Output = Result<MedicalCondition, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MedicalConditionService: Send + Sync {
    fn get_medical_conditions(
        &self,
    ) -> impl Future<Output = Result<Vec<MedicalCondition>, CoreError>> + Send;

    fn search_medical_conditions(
        &self,
        term: Option<String>,
    ) -> impl Future<Output = Result<Vec<MedicalCondition>, CoreError>> + Send;

    fn get_medical_condition(
        &self,
        condition_id: Uuid,
    ) -> impl Future<Output = Result<MedicalCondition, CoreError>> + Send;
}
