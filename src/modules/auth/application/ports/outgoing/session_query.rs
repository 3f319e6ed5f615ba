use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SessionView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionQuery {
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionView>, SessionQueryError>;
}

#[derive(Debug)]
pub enum SessionQueryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for SessionQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
