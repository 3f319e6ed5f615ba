use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::user_admin_query::UserRecord;
use crate::modules::admin::application::ports::outgoing::user_repository::{
    NewUser, UserProfileUpdate, UserRepository, UserRepositoryError,
};
use crate::modules::auth::adapter::outgoing::account_query_postgres::CREDENTIAL_PROVIDER;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::accounts::ActiveModel as AccountActiveModel;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::modules::auth::application::domain::entities::UserRole;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
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

    fn map_insert_err(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UserRepositoryError> {
        // User row and credential account commit together; a half-created
        // reviewer who cannot log in must not be observable.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let user_id = Uuid::new_v4();
        let active_user = UserActiveModel {
            id: Set(user_id),
            full_name: Set(user.full_name),
            email: Set(user.email),
            username: Set(user.username),
            role: Set(user.role.as_str().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = match active_user.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_insert_err(e));
            }
        };

        let active_account = AccountActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            provider: Set(CREDENTIAL_PROVIDER.to_string()),
            password_hash: Set(user.password_hash),
            created_at: NotSet,
            updated_at: NotSet,
        };

        if let Err(e) = active_account.insert(&txn).await {
            let _ = txn.rollback().await;
            return Err(Self::map_insert_err(e));
        }

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_record(inserted))
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        update: UserProfileUpdate,
    ) -> Result<UserRecord, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.full_name = Set(update.full_name);
        active_user.email = Set(update.email);
        active_user.username = Set(update.username);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_insert_err)?;

        Ok(Self::map_to_record(updated))
    }
}
