use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::info;
use uuid::Uuid;

use crate::modules::judgement::application::domain::entities::VerificationRecord;
use crate::modules::judgement::application::ports::outgoing::{
    JudgementQuery, SaveVerificationData, VerificationRepository,
};

#[derive(Debug, Clone)]
pub struct SaveVerificationInput {
    pub judgement_id: Uuid,
    pub reviewer_id: Uuid,
    /// The corrected feature payload from the edit form.
    pub features: JsonValue,
    pub is_verified: bool,
}

#[derive(Debug)]
pub enum SaveVerificationError {
    JudgementNotFound,
    /// Only the current assignee may submit for a judgement.
    NotAssigned,
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for SaveVerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveVerificationError::JudgementNotFound => write!(f, "Judgement not found"),
            SaveVerificationError::NotAssigned => {
                write!(f, "Judgement is not assigned to this reviewer")
            }
            SaveVerificationError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SaveVerificationError {}

#[async_trait]
pub trait ISaveVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        input: SaveVerificationInput,
    ) -> Result<VerificationRecord, SaveVerificationError>;
}

pub struct SaveVerificationUseCase {
    judgement_query: Arc<dyn JudgementQuery + Send + Sync>,
    verification_repository: Arc<dyn VerificationRepository + Send + Sync>,
}

impl SaveVerificationUseCase {
    pub fn new(
        judgement_query: Arc<dyn JudgementQuery + Send + Sync>,
        verification_repository: Arc<dyn VerificationRepository + Send + Sync>,
    ) -> Self {
        Self {
            judgement_query,
            verification_repository,
        }
    }
}

#[async_trait]
impl ISaveVerificationUseCase for SaveVerificationUseCase {
    async fn execute(
        &self,
        input: SaveVerificationInput,
    ) -> Result<VerificationRecord, SaveVerificationError> {
        let judgement = self
            .judgement_query
            .find_by_id(input.judgement_id)
            .await
            .map_err(|e| SaveVerificationError::InfrastructureError(e.to_string()))?
            .ok_or(SaveVerificationError::JudgementNotFound)?;

        if judgement.assigned_to != Some(input.reviewer_id) {
            return Err(SaveVerificationError::NotAssigned);
        }

        let record = self
            .verification_repository
            .upsert(SaveVerificationData {
                source_judgement_id: input.judgement_id,
                verified_by: input.reviewer_id,
                features: input.features,
                is_verified: input.is_verified,
            })
            .await
            .map_err(|e| SaveVerificationError::InfrastructureError(e.to_string()))?;

        info!(
            judgement_id = %record.source_judgement_id,
            reviewer_id = %record.verified_by,
            is_verified = record.is_verified,
            "Verification record saved"
        );

        Ok(record)
    }
}
