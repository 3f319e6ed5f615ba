use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<UserRecord>,
    /// Total matching rows, not just this page.
    pub total: u64,
}

#[async_trait]
pub trait UserAdminQuery {
    /// One page of users sorted by full name. `page` is 1-based.
    async fn list_users(&self, page: u64, per_page: u64)
        -> Result<UserPage, UserAdminQueryError>;
}

#[derive(Debug)]
pub enum UserAdminQueryError {
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserAdminQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAdminQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
