use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::domain::entities::SessionUser;
use crate::modules::auth::application::ports::outgoing::{SessionQuery, UserQuery};
use crate::modules::auth::application::services::session_token::hash_session_token;

#[derive(Debug)]
pub enum ResolveSessionError {
    /// Unknown token, expired session, or a session whose user is gone.
    /// All three read as "not signed in" to the caller.
    SessionNotFound,
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ResolveSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveSessionError::SessionNotFound => write!(f, "Session not found"),
            ResolveSessionError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ResolveSessionError {}

#[async_trait]
pub trait IResolveSessionUseCase: Send + Sync {
    async fn execute(&self, raw_token: &str) -> Result<SessionUser, ResolveSessionError>;
}

/// Turns a bearer token into the session's user. This is the single
/// resolution path behind both request extractors, so every handler sees
/// the same authentication semantics.
pub struct ResolveSessionUseCase {
    session_query: Arc<dyn SessionQuery + Send + Sync>,
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl ResolveSessionUseCase {
    pub fn new(
        session_query: Arc<dyn SessionQuery + Send + Sync>,
        user_query: Arc<dyn UserQuery + Send + Sync>,
    ) -> Self {
        Self {
            session_query,
            user_query,
        }
    }
}

#[async_trait]
impl IResolveSessionUseCase for ResolveSessionUseCase {
    async fn execute(&self, raw_token: &str) -> Result<SessionUser, ResolveSessionError> {
        let session = self
            .session_query
            .find_by_token_hash(&hash_session_token(raw_token))
            .await
            .map_err(|e| ResolveSessionError::InfrastructureError(e.to_string()))?
            .ok_or(ResolveSessionError::SessionNotFound)?;

        if session.expires_at < Utc::now() {
            return Err(ResolveSessionError::SessionNotFound);
        }

        let user = self
            .user_query
            .find_by_id(session.user_id)
            .await
            .map_err(|e| ResolveSessionError::InfrastructureError(e.to_string()))?
            .ok_or(ResolveSessionError::SessionNotFound)?;

        Ok(SessionUser {
            user_id: user.id,
            full_name: user.full_name,
            username: user.username,
            email: user.email,
            role: user.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::UserRole;
    use crate::modules::auth::application::ports::outgoing::{
        SessionQueryError, SessionView, UserAuthView, UserQueryError,
    };
    use chrono::Duration;
    use uuid::Uuid;

    struct StubSessionQuery {
        session: Option<SessionView>,
    }

    #[async_trait]
    impl SessionQuery for StubSessionQuery {
        async fn find_by_token_hash(
            &self,
            _token_hash: &str,
        ) -> Result<Option<SessionView>, SessionQueryError> {
            Ok(self.session.clone())
        }
    }

    struct StubUserQuery {
        user: Option<UserAuthView>,
    }

    #[async_trait]
    impl UserQuery for StubUserQuery {
        async fn find_by_id(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<UserAuthView>, UserQueryError> {
            Ok(self.user.clone())
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserAuthView>, UserQueryError> {
            unimplemented!("Not used in this test")
        }
    }

    fn session(expires_in: Duration) -> SessionView {
        SessionView {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() + expires_in,
        }
    }

    fn admin(id: Uuid) -> UserAuthView {
        UserAuthView {
            id,
            full_name: "Ada Admin".to_string(),
            username: "ada.admin".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::Admin,
        }
    }

    #[tokio::test]
    async fn test_resolves_live_session_to_user() {
        let live = session(Duration::hours(1));
        let user_id = live.user_id;
        let uc = ResolveSessionUseCase::new(
            Arc::new(StubSessionQuery {
                session: Some(live),
            }),
            Arc::new(StubUserQuery {
                user: Some(admin(user_id)),
            }),
        );

        let resolved = uc.execute("token").await.unwrap();
        assert_eq!(resolved.user_id, user_id);
        assert!(resolved.role.is_admin());
    }

    #[tokio::test]
    async fn test_expired_session_reads_as_not_found() {
        let stale = session(Duration::seconds(-5));
        let user_id = stale.user_id;
        let uc = ResolveSessionUseCase::new(
            Arc::new(StubSessionQuery {
                session: Some(stale),
            }),
            Arc::new(StubUserQuery {
                user: Some(admin(user_id)),
            }),
        );

        assert!(matches!(
            uc.execute("token").await.unwrap_err(),
            ResolveSessionError::SessionNotFound
        ));
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_found() {
        let uc = ResolveSessionUseCase::new(
            Arc::new(StubSessionQuery { session: None }),
            Arc::new(StubUserQuery { user: None }),
        );

        assert!(matches!(
            uc.execute("token").await.unwrap_err(),
            ResolveSessionError::SessionNotFound
        ));
    }

    #[tokio::test]
    async fn test_session_for_deleted_user_is_not_found() {
        let live = session(Duration::hours(1));
        let uc = ResolveSessionUseCase::new(
            Arc::new(StubSessionQuery {
                session: Some(live),
            }),
            Arc::new(StubUserQuery { user: None }),
        );

        assert!(matches!(
            uc.execute("token").await.unwrap_err(),
            ResolveSessionError::SessionNotFound
        ));
    }
}
