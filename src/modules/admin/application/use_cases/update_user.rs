use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::{
    UserProfileUpdate, UserRecord, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug)]
pub enum UpdateUserError {
    ValidationError(String),
    UserNotFound,
    UserAlreadyExists,
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UpdateUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateUserError::ValidationError(msg) => write!(f, "{}", msg),
            UpdateUserError::UserNotFound => write!(f, "User not found"),
            UpdateUserError::UserAlreadyExists => {
                write!(f, "A user with this email or username already exists")
            }
            UpdateUserError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for UpdateUserError {}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(&self, input: UpdateUserInput) -> Result<UserRecord, UpdateUserError>;
}

/// Inline edit of name / email / username from the admin users table.
/// Role changes are deliberately not supported here; promote by recreating.
pub struct UpdateUserUseCase {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UpdateUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl IUpdateUserUseCase for UpdateUserUseCase {
    async fn execute(&self, input: UpdateUserInput) -> Result<UserRecord, UpdateUserError> {
        let full_name = input.full_name.trim().to_string();
        let email = input.email.trim().to_lowercase();
        let username = input.username.trim().to_lowercase();

        if full_name.is_empty() || username.is_empty() {
            return Err(UpdateUserError::ValidationError(
                "Name and username must not be empty".to_string(),
            ));
        }
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(UpdateUserError::ValidationError(
                "A valid email address is required".to_string(),
            ));
        }

        self.user_repository
            .update_user(
                input.user_id,
                UserProfileUpdate {
                    full_name,
                    email,
                    username,
                },
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                UserRepositoryError::UserAlreadyExists => UpdateUserError::UserAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => {
                    UpdateUserError::InfrastructureError(msg)
                }
            })
    }
}
