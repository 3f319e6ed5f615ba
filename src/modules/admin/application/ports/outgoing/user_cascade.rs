use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Removes a user and every record that references them, atomically:
/// the user row, their sessions, their credential accounts, and the
/// `assigned_to` marks on their judgements (cleared, not deleted).
///
/// A target that does not exist is a success: each step of the cascade is a
/// no-op on absent ids, so a repeated delete converges on the same end state.
#[async_trait]
pub trait UserCascadeRepository {
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserCascadeError>;
}

#[derive(Debug, Error)]
pub enum UserCascadeError {
    /// The verification guard tripped: at least one judgement is both
    /// assigned to the user and verified by them. Nothing was written.
    #[error("Cannot delete user with active verification assignments")]
    ActiveVerificationAssignments,

    /// The store failed mid-transaction; everything was rolled back.
    /// Safe for the caller to retry.
    #[error("Database error: {0}")]
    DatabaseError(String),
}
