use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::judgement::application::ports::outgoing::{
    JudgementRepository, JudgementRepositoryError,
};

#[derive(Debug, Clone)]
pub struct AssignJudgementInput {
    pub judgement_id: Uuid,
    /// `None` clears the assignment.
    pub assignee: Option<Uuid>,
}

#[derive(Debug)]
pub enum AssignJudgementError {
    JudgementNotFound,
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for AssignJudgementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignJudgementError::JudgementNotFound => write!(f, "Judgement not found"),
            AssignJudgementError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AssignJudgementError {}

#[async_trait]
pub trait IAssignJudgementUseCase: Send + Sync {
    async fn execute(&self, input: AssignJudgementInput) -> Result<(), AssignJudgementError>;
}

pub struct AssignJudgementUseCase {
    judgement_repository: Arc<dyn JudgementRepository + Send + Sync>,
}

impl AssignJudgementUseCase {
    pub fn new(judgement_repository: Arc<dyn JudgementRepository + Send + Sync>) -> Self {
        Self {
            judgement_repository,
        }
    }
}

#[async_trait]
impl IAssignJudgementUseCase for AssignJudgementUseCase {
    async fn execute(&self, input: AssignJudgementInput) -> Result<(), AssignJudgementError> {
        self.judgement_repository
            .set_assignee(input.judgement_id, input.assignee)
            .await
            .map_err(|e| match e {
                JudgementRepositoryError::JudgementNotFound => {
                    AssignJudgementError::JudgementNotFound
                }
                JudgementRepositoryError::DatabaseError(msg) => {
                    AssignJudgementError::InfrastructureError(msg)
                }
            })?;

        info!(
            judgement_id = %input.judgement_id,
            assignee = ?input.assignee,
            "Judgement assignment changed"
        );

        Ok(())
    }
}
