use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::SessionRepository;
use crate::modules::auth::application::services::session_token::hash_session_token;

#[derive(Debug)]
pub enum LogoutError {
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for LogoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoutError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LogoutError {}

#[async_trait]
pub trait ILogoutUserUseCase: Send + Sync {
    async fn execute(&self, raw_token: &str) -> Result<(), LogoutError>;
}

/// Drops the presented session row. A token that resolves to nothing is
/// still a successful logout.
pub struct LogoutUserUseCase {
    session_repository: Arc<dyn SessionRepository + Send + Sync>,
}

impl LogoutUserUseCase {
    pub fn new(session_repository: Arc<dyn SessionRepository + Send + Sync>) -> Self {
        Self { session_repository }
    }
}

#[async_trait]
impl ILogoutUserUseCase for LogoutUserUseCase {
    async fn execute(&self, raw_token: &str) -> Result<(), LogoutError> {
        self.session_repository
            .delete_by_token_hash(&hash_session_token(raw_token))
            .await
            .map_err(|e| LogoutError::InfrastructureError(e.to_string()))
    }
}
