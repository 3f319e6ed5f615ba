use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::session_query::{
    SessionQuery, SessionQueryError, SessionView,
};

use super::sea_orm_entity::sessions::{Column as SessionColumn, Entity as SessionEntity};

#[derive(Clone, Debug)]
pub struct SessionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SessionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionQuery for SessionQueryPostgres {
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionView>, SessionQueryError> {
        let session = SessionEntity::find()
            .filter(SessionColumn::TokenHash.eq(token_hash))
            .one(&*self.db)
            .await
            .map_err(|e| SessionQueryError::DatabaseError(e.to_string()))?;

        Ok(session.map(|s| SessionView {
            id: s.id,
            user_id: s.user_id,
            expires_at: s.expires_at.with_timezone(&chrono::Utc),
        }))
    }
}
