use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::Session;

#[async_trait]
pub trait SessionRepository {
    async fn create_session(&self, session: Session) -> Result<(), SessionRepositoryError>;

    /// Remove the session with the given token hash. Deleting a session that
    /// no longer exists is a success; logout is idempotent.
    async fn delete_by_token_hash(&self, token_hash: &str)
        -> Result<(), SessionRepositoryError>;
}

#[derive(Debug)]
pub enum SessionRepositoryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for SessionRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
