use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::judgement::application::ports::outgoing::{
    JudgementPage, JudgementQuery, JudgementQueryError,
};

pub const JUDGEMENTS_PER_PAGE: u64 = 20;

#[derive(Debug, Clone)]
pub struct ListJudgementsInput {
    pub page: u64,
    /// When set, only judgements assigned to this user.
    pub assigned_to: Option<Uuid>,
}

#[derive(Debug)]
pub enum ListJudgementsError {
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListJudgementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListJudgementsError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ListJudgementsError {}

#[async_trait]
pub trait IListJudgementsUseCase: Send + Sync {
    async fn execute(&self, input: ListJudgementsInput)
        -> Result<JudgementPage, ListJudgementsError>;
}

pub struct ListJudgementsUseCase {
    judgement_query: Arc<dyn JudgementQuery + Send + Sync>,
}

impl ListJudgementsUseCase {
    pub fn new(judgement_query: Arc<dyn JudgementQuery + Send + Sync>) -> Self {
        Self { judgement_query }
    }
}

#[async_trait]
impl IListJudgementsUseCase for ListJudgementsUseCase {
    async fn execute(
        &self,
        input: ListJudgementsInput,
    ) -> Result<JudgementPage, ListJudgementsError> {
        self.judgement_query
            .list_judgements(input.page.max(1), JUDGEMENTS_PER_PAGE, input.assigned_to)
            .await
            .map_err(|e| match e {
                JudgementQueryError::DatabaseError(msg) => {
                    ListJudgementsError::InfrastructureError(msg)
                }
            })
    }
}
