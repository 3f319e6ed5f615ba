use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::judgement::application::domain::entities::{
    JudgementDetail, VerificationRecord,
};
use crate::modules::judgement::application::ports::outgoing::{
    JudgementQuery, VerificationRepository,
};

/// The edit screen needs the judgement and the caller's own saved record
/// (if any) to prefill the form.
#[derive(Debug, Clone)]
pub struct FetchJudgementOutput {
    pub judgement: JudgementDetail,
    pub own_verification: Option<VerificationRecord>,
}

#[derive(Debug)]
pub enum FetchJudgementError {
    JudgementNotFound,
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for FetchJudgementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchJudgementError::JudgementNotFound => write!(f, "Judgement not found"),
            FetchJudgementError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FetchJudgementError {}

#[async_trait]
pub trait IFetchJudgementUseCase: Send + Sync {
    async fn execute(
        &self,
        judgement_id: Uuid,
        caller_id: Uuid,
    ) -> Result<FetchJudgementOutput, FetchJudgementError>;
}

pub struct FetchJudgementUseCase {
    judgement_query: Arc<dyn JudgementQuery + Send + Sync>,
    verification_repository: Arc<dyn VerificationRepository + Send + Sync>,
}

impl FetchJudgementUseCase {
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
impl IFetchJudgementUseCase for FetchJudgementUseCase {
    async fn execute(
        &self,
        judgement_id: Uuid,
        caller_id: Uuid,
    ) -> Result<FetchJudgementOutput, FetchJudgementError> {
        let judgement = self
            .judgement_query
            .find_by_id(judgement_id)
            .await
            .map_err(|e| FetchJudgementError::InfrastructureError(e.to_string()))?
            .ok_or(FetchJudgementError::JudgementNotFound)?;

        let own_verification = self
            .verification_repository
            .find_for_reviewer(judgement_id, caller_id)
            .await
            .map_err(|e| FetchJudgementError::InfrastructureError(e.to_string()))?;

        Ok(FetchJudgementOutput {
            judgement,
            own_verification,
        })
    }
}
