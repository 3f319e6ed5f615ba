use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Per-user workload badge data for the admin table: how many judgements are
/// assigned to the user, and how many of those they have verified. The UI
/// also uses the verified count as its client-side delete guard, mirroring
/// the transactional guard in the cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAssignmentCounts {
    pub user_id: Uuid,
    pub assigned: u64,
    pub verified: u64,
}

#[async_trait]
pub trait AssignmentCountQuery {
    /// Counts for every user that currently has at least one assignment.
    async fn counts(&self) -> Result<Vec<UserAssignmentCounts>, AssignmentCountQueryError>;
}

#[derive(Debug)]
pub enum AssignmentCountQueryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for AssignmentCountQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentCountQueryError::DatabaseError(msg) => {
                write!(f, "Database error: {}", msg)
            }
        }
    }
}
