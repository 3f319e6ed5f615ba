use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Looks up the credential record backing password login. Accounts are a
/// separate collection so that other providers can coexist later and so the
/// cascading user delete has a single place to purge credentials from.
#[async_trait]
pub trait AccountQuery {
    /// Password hash of the user's "credential" account, if one exists.
    async fn find_password_hash(
        &self,
        user_id: Uuid,
    ) -> Result<Option<String>, AccountQueryError>;
}

#[derive(Debug)]
pub enum AccountQueryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for AccountQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
