use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;
use tracing::info;

use crate::modules::admin::application::ports::outgoing::{
    NewUser, UserRecord, UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::auth::application::ports::outgoing::PasswordHasher;

const MIN_NAME_LEN: usize = 3;
const MIN_USERNAME_LEN: usize = 5;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub full_name: String,
    pub email: String,
    /// Defaults to the normalized full name when absent, the same rule the
    /// admin form applies while typing.
    pub username: Option<String>,
    pub role: UserRole,
}

#[derive(Debug)]
pub enum CreateUserError {
    ValidationError(String),
    UserAlreadyExists,
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for CreateUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateUserError::ValidationError(msg) => write!(f, "{}", msg),
            CreateUserError::UserAlreadyExists => {
                write!(f, "A user with this email or username already exists")
            }
            CreateUserError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CreateUserError {}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<UserRecord, CreateUserError>;
}

/// Creates a reviewer (or another admin) plus their credential account.
/// The initial password is the username; accounts are provisioned by an
/// admin and the reviewer changes it on first sign-in.
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl CreateUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

/// "Jane  van Dyke" -> "jane.van.dyke"
pub fn derive_username(full_name: &str) -> String {
    let whitespace = Regex::new(r"\s+").expect("valid regex");
    whitespace
        .replace_all(full_name.trim(), ".")
        .to_lowercase()
}

#[async_trait]
impl ICreateUserUseCase for CreateUserUseCase {
    async fn execute(&self, input: CreateUserInput) -> Result<UserRecord, CreateUserError> {
        let full_name = input.full_name.trim().to_string();
        if full_name.len() < MIN_NAME_LEN {
            return Err(CreateUserError::ValidationError(format!(
                "Name must be at least {} characters",
                MIN_NAME_LEN
            )));
        }

        let email = input.email.trim().to_lowercase();
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(CreateUserError::ValidationError(
                "A valid email address is required".to_string(),
            ));
        }

        let username = match input.username {
            Some(u) => u.trim().to_lowercase(),
            None => derive_username(&full_name),
        };
        if username.len() < MIN_USERNAME_LEN {
            return Err(CreateUserError::ValidationError(format!(
                "Username must be at least {} characters",
                MIN_USERNAME_LEN
            )));
        }

        let password_hash = self
            .password_hasher
            .hash_password(&username)
            .await
            .map_err(|e| CreateUserError::InfrastructureError(e.to_string()))?;

        let created = self
            .user_repository
            .create_user(NewUser {
                full_name,
                email,
                username,
                role: input.role,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                UserRepositoryError::UserNotFound => {
                    CreateUserError::InfrastructureError("User not found".to_string())
                }
                UserRepositoryError::DatabaseError(msg) => {
                    CreateUserError::InfrastructureError(msg)
                }
            })?;

        info!(
            user_id = %created.id,
            username = %created.username,
            role = %created.role,
            "User created"
        );

        Ok(created)
    }
}
