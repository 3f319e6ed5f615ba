use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::account_query::{
    AccountQuery, AccountQueryError,
};

use super::sea_orm_entity::accounts::{Column as AccountColumn, Entity as AccountEntity};

pub const CREDENTIAL_PROVIDER: &str = "credential";

#[derive(Clone, Debug)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_password_hash(
        &self,
        user_id: Uuid,
    ) -> Result<Option<String>, AccountQueryError> {
        let account = AccountEntity::find()
            .filter(AccountColumn::UserId.eq(user_id))
            .filter(AccountColumn::Provider.eq(CREDENTIAL_PROVIDER))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(account.map(|a| a.password_hash))
    }
}
