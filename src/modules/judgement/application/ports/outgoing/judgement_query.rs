use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::judgement::application::domain::entities::{
    JudgementDetail, JudgementSummary,
};

#[derive(Debug, Clone)]
pub struct JudgementPage {
    pub judgements: Vec<JudgementSummary>,
    pub total: u64,
}

#[async_trait]
pub trait JudgementQuery {
    /// Newest first; optionally narrowed to one assignee. `page` is 1-based.
    async fn list_judgements(
        &self,
        page: u64,
        per_page: u64,
        assigned_to: Option<Uuid>,
    ) -> Result<JudgementPage, JudgementQueryError>;

    async fn find_by_id(
        &self,
        judgement_id: Uuid,
    ) -> Result<Option<JudgementDetail>, JudgementQueryError>;
}

#[derive(Debug)]
pub enum JudgementQueryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for JudgementQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JudgementQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
