use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use crate::modules::judgement::application::domain::entities::VerificationRecord;

#[derive(Debug, Clone)]
pub struct SaveVerificationData {
    pub source_judgement_id: Uuid,
    pub verified_by: Uuid,
    pub features: JsonValue,
    pub is_verified: bool,
}

#[async_trait]
pub trait VerificationRepository {
    /// Insert or overwrite the reviewer's record for this judgement.
    async fn upsert(
        &self,
        data: SaveVerificationData,
    ) -> Result<VerificationRecord, VerificationRepositoryError>;

    async fn find_for_reviewer(
        &self,
        judgement_id: Uuid,
        reviewer_id: Uuid,
    ) -> Result<Option<VerificationRecord>, VerificationRepositoryError>;
}

#[derive(Debug)]
pub enum VerificationRepositoryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for VerificationRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationRepositoryError::DatabaseError(msg) => {
                write!(f, "Database error: {}", msg)
            }
        }
    }
}
