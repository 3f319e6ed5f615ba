use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::admin::application::ports::outgoing::user_admin_query::{
    UserAdminQuery, UserAdminQueryError, UserPage, UserRecord,
};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::modules::auth::application::domain::entities::UserRole;

#[derive(Clone, Debug)]
pub struct UserAdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserAdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: UserModel) -> UserRecord {
        UserRecord {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            username: model.username,
            role: UserRole::parse(&model.role),
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl UserAdminQuery for UserAdminQueryPostgres {
    async fn list_users(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<UserPage, UserAdminQueryError> {
        let paginator = UserEntity::find()
            .order_by_asc(UserColumn::FullName)
            .paginate(&*self.db, per_page);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| UserAdminQueryError::DatabaseError(e.to_string()))?;

        // sea-orm pages are 0-based; the API is 1-based.
        let users = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| UserAdminQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Self::map_to_record)
            .collect();

        Ok(UserPage { users, total })
    }
}
