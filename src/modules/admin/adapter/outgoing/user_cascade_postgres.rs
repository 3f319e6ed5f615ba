use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::user_cascade::{
    UserCascadeError, UserCascadeRepository,
};

/// Transactional removal of a user across the four tables that reference
/// them. The guard count and every write share one transaction; checking
/// first and writing later without that boundary would race a concurrent
/// verification.
#[derive(Clone)]
pub struct UserCascadePostgres {
    db: Arc<DatabaseConnection>,
}

impl UserCascadePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Judgements that are both assigned to the user and carry a verification
    /// record by that same user with is_verified = true. Any such row blocks
    /// deletion.
    fn blocking_count_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT COUNT(*) AS blocking_count
            FROM judgements j
            WHERE j.assigned_to = $1
              AND EXISTS (
                SELECT 1
                FROM verified_features vf
                WHERE vf.source_judgement_id = j.id
                  AND vf.verified_by = $1
                  AND vf.is_verified = true
              )
            "#,
            vec![user_id.into()],
        )
    }

    fn delete_user_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
            vec![user_id.into()],
        )
    }

    fn delete_sessions_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM sessions
            WHERE user_id = $1
            "#,
            vec![user_id.into()],
        )
    }

    fn delete_accounts_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM accounts
            WHERE user_id = $1
            "#,
            vec![user_id.into()],
        )
    }

    /// Assignments are cleared, never deleted: judgements outlive users.
    fn clear_assignments_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE judgements
            SET assigned_to = NULL
            WHERE assigned_to = $1
            "#,
            vec![user_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> UserCascadeError {
        UserCascadeError::DatabaseError(e.to_string())
    }

    async fn blocking_count(
        txn: &DatabaseTransaction,
        user_id: Uuid,
    ) -> Result<i64, UserCascadeError> {
        let row = txn
            .query_one(Self::blocking_count_stmt(user_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                UserCascadeError::DatabaseError("Guard query returned no rows".to_string())
            })?;

        row.try_get("", "blocking_count")
            .map_err(Self::map_db_err)
    }
}

#[async_trait]
impl UserCascadeRepository for UserCascadePostgres {
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserCascadeError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // Guard inside the transaction, so the count cannot go stale
        // between check and writes.
        match Self::blocking_count(&txn, user_id).await {
            Ok(0) => {}
            Ok(_) => {
                let _ = txn.rollback().await;
                return Err(UserCascadeError::ActiveVerificationAssignments);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        }

        let writes = [
            Self::delete_user_stmt(user_id),
            Self::delete_sessions_stmt(user_id),
            Self::delete_accounts_stmt(user_id),
            Self::clear_assignments_stmt(user_id),
        ];

        for stmt in writes {
            if let Err(e) = txn.execute(stmt).await {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(())
    }
}
