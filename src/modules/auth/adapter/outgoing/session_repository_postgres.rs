use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::Session;
use crate::modules::auth::application::ports::outgoing::session_repository::{
    SessionRepository, SessionRepositoryError,
};

use super::sea_orm_entity::sessions::{
    ActiveModel as SessionActiveModel, Column as SessionColumn, Entity as SessionEntity,
};

#[derive(Clone, Debug)]
pub struct SessionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SessionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryPostgres {
    async fn create_session(&self, session: Session) -> Result<(), SessionRepositoryError> {
        let active_session = SessionActiveModel {
            id: Set(session.id),
            token_hash: Set(session.token_hash),
            user_id: Set(session.user_id),
            expires_at: Set(session.expires_at.into()),
            created_at: NotSet,
        };

        active_session
            .insert(&*self.db)
            .await
            .map_err(|e| SessionRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<(), SessionRepositoryError> {
        SessionEntity::delete_many()
            .filter(SessionColumn::TokenHash.eq(token_hash))
            .exec(&*self.db)
            .await
            .map_err(|e| SessionRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use crate::modules::auth::adapter::outgoing::sea_orm_entity::sessions::Model as SessionModel;

    #[tokio::test]
    async fn test_create_session_inserts_row() {
        let session = Session::new(
            Uuid::new_v4(),
            "token-hash".to_string(),
            Utc::now() + Duration::hours(12),
        );
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![SessionModel {
                id: session.id,
                token_hash: session.token_hash.clone(),
                user_id: session.user_id,
                expires_at: session.expires_at.into(),
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = SessionRepositoryPostgres::new(Arc::new(db));

        assert!(repo.create_session(session).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_session_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SessionRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_by_token_hash("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("delete failed".to_string())])
            .into_connection();

        let repo = SessionRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_by_token_hash("hash").await;

        assert!(matches!(
            result.unwrap_err(),
            SessionRepositoryError::DatabaseError(_)
        ));
    }
}
