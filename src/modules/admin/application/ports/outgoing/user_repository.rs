use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::user_admin_query::UserRecord;
use crate::modules::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    /// Hash of the initial password; stored on the credential account row.
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct UserProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub username: String,
}

#[async_trait]
pub trait UserRepository {
    /// Insert the user row and its credential account as one unit.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: Uuid,
        update: UserProfileUpdate,
    ) -> Result<UserRecord, UserRepositoryError>;
}

#[derive(Debug)]
pub enum UserRepositoryError {
    UserAlreadyExists,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserAlreadyExists => {
                write!(f, "A user with this email or username already exists")
            }
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
