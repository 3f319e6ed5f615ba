use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[async_trait]
pub trait JudgementRepository {
    /// Set or clear the `assigned_to` mark. Passing `None` unassigns.
    async fn set_assignee(
        &self,
        judgement_id: Uuid,
        assignee: Option<Uuid>,
    ) -> Result<(), JudgementRepositoryError>;
}

#[derive(Debug)]
pub enum JudgementRepositoryError {
    JudgementNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for JudgementRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JudgementRepositoryError::JudgementNotFound => write!(f, "Judgement not found"),
            JudgementRepositoryError::DatabaseError(msg) => {
                write!(f, "Database error: {}", msg)
            }
        }
    }
}
