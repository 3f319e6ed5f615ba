use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserRole;

/// Read-side view of a user as the auth flow needs it.
#[derive(Debug, Clone)]
pub struct UserAuthView {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

#[async_trait]
pub trait UserQuery {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserAuthView>, UserQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAuthView>, UserQueryError>;
}

#[derive(Debug)]
pub enum UserQueryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
