use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::warn;

use crate::modules::auth::application::domain::entities::{Session, SessionUser};
use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, PasswordHasher, SessionRepository, UserQuery,
};
use crate::modules::auth::application::services::session_token::{
    generate_session_token, hash_session_token,
};

/// ========================= Login Request =========================
///
/// Validated at construction so the use case only ever sees a
/// well-formed request.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();

        if !email_address::EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(LoginRequestError::MissingPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginRequestError {
    InvalidEmail,
    MissingPassword,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginRequestError::InvalidEmail => write!(f, "A valid email address is required"),
            LoginRequestError::MissingPassword => write!(f, "Password is required"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

/// ========================= Use Case =========================

#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    /// Raw session token handed to the client; only its hash is stored.
    pub session_token: String,
    pub expires_at: chrono::DateTime<Utc>,
    pub user: SessionUser,
}

#[derive(Debug)]
pub enum LoginError {
    /// Unknown email, missing credential record, or wrong password.
    /// Collapsed into one variant so responses do not leak which it was.
    InvalidCredentials,
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase {
    user_query: Arc<dyn UserQuery + Send + Sync>,
    account_query: Arc<dyn AccountQuery + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    session_repository: Arc<dyn SessionRepository + Send + Sync>,
    session_ttl_seconds: i64,
}

impl LoginUserUseCase {
    pub fn new(
        user_query: Arc<dyn UserQuery + Send + Sync>,
        account_query: Arc<dyn AccountQuery + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        session_repository: Arc<dyn SessionRepository + Send + Sync>,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            user_query,
            account_query,
            password_hasher,
            session_repository,
            session_ttl_seconds,
        }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .user_query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::InfrastructureError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_hash = self
            .account_query
            .find_password_hash(user.id)
            .await
            .map_err(|e| LoginError::InfrastructureError(e.to_string()))?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "User has no credential account");
                LoginError::InvalidCredentials
            })?;

        let matches = self
            .password_hasher
            .verify_password(request.password(), &password_hash)
            .await
            .map_err(|e| LoginError::InfrastructureError(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let token = generate_session_token();
        let expires_at = Utc::now() + Duration::seconds(self.session_ttl_seconds);
        let session = Session::new(user.id, hash_session_token(&token), expires_at);

        self.session_repository
            .create_session(session)
            .await
            .map_err(|e| LoginError::InfrastructureError(e.to_string()))?;

        Ok(LoginUserResponse {
            session_token: token,
            expires_at,
            user: SessionUser {
                user_id: user.id,
                full_name: user.full_name,
                username: user.username,
                email: user.email,
                role: user.role,
            },
        })
    }
}
