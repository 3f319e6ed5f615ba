use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::{
    UserCascadeError, UserCascadeRepository,
};

/// ========================= Delete Request =========================
///
/// Who is being removed, and which admin asked. The role check itself
/// happened at the request boundary; the requesting admin is carried here
/// for the audit log only.
#[derive(Debug, Clone)]
pub struct DeleteUserRequest {
    pub target_user_id: Uuid,
    pub requested_by: Uuid,
}

impl DeleteUserRequest {
    pub fn new(target_user_id: Uuid, requested_by: Uuid) -> Self {
        Self {
            target_user_id,
            requested_by,
        }
    }
}

/// ========================= Use Case Error =========================
#[derive(Debug)]
pub enum DeleteUserError {
    /// Guard tripped: the user still has verified work assigned to them.
    ActiveVerificationAssignments,
    /// Transaction failed and was rolled back; the caller may retry.
    StoreError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for DeleteUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteUserError::ActiveVerificationAssignments => {
                write!(f, "Cannot delete user with active verification assignments")
            }
            DeleteUserError::StoreError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DeleteUserError {}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, request: DeleteUserRequest) -> Result<(), DeleteUserError>;
}

/// ========================= Use Case =========================
///
/// All consistency rules live in the cascade repository's transaction; this
/// layer translates the outcome and records who deleted whom. Deleting an
/// already-absent user succeeds (the cascade is a no-op then), so repeated
/// deletes are idempotent.
pub struct DeleteUserUseCase {
    user_cascade: Arc<dyn UserCascadeRepository + Send + Sync>,
}

impl DeleteUserUseCase {
    pub fn new(user_cascade: Arc<dyn UserCascadeRepository + Send + Sync>) -> Self {
        Self { user_cascade }
    }
}

#[async_trait]
impl IDeleteUserUseCase for DeleteUserUseCase {
    async fn execute(&self, request: DeleteUserRequest) -> Result<(), DeleteUserError> {
        self.user_cascade
            .delete_user(request.target_user_id)
            .await
            .map_err(|e| match e {
                UserCascadeError::ActiveVerificationAssignments => {
                    DeleteUserError::ActiveVerificationAssignments
                }
                UserCascadeError::DatabaseError(msg) => DeleteUserError::StoreError(msg),
            })?;

        info!(
            target_user_id = %request.target_user_id,
            requested_by = %request.requested_by,
            "User deleted with cascading cleanup"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub UserCascadeMock {}

        #[async_trait]
        impl UserCascadeRepository for UserCascadeMock {
            async fn delete_user(&self, user_id: Uuid) -> Result<(), UserCascadeError>;
        }
    }

    #[tokio::test]
    async fn test_delete_passes_target_to_cascade() {
        let target = Uuid::new_v4();

        let mut cascade = MockUserCascadeMock::new();
        cascade
            .expect_delete_user()
            .with(eq(target))
            .times(1)
            .returning(|_| Ok(()));

        let uc = DeleteUserUseCase::new(Arc::new(cascade));
        let result = uc
            .execute(DeleteUserRequest::new(target, Uuid::new_v4()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_verification_guard_maps_to_conflict_error() {
        let mut cascade = MockUserCascadeMock::new();
        cascade
            .expect_delete_user()
            .returning(|_| Err(UserCascadeError::ActiveVerificationAssignments));

        let uc = DeleteUserUseCase::new(Arc::new(cascade));
        let err = uc
            .execute(DeleteUserRequest::new(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteUserError::ActiveVerificationAssignments));
        assert!(err.to_string().contains("active verification assignments"));
    }

    #[tokio::test]
    async fn test_repeated_failing_delete_reports_same_conflict() {
        let mut cascade = MockUserCascadeMock::new();
        cascade
            .expect_delete_user()
            .times(2)
            .returning(|_| Err(UserCascadeError::ActiveVerificationAssignments));

        let uc = DeleteUserUseCase::new(Arc::new(cascade));
        let request = DeleteUserRequest::new(Uuid::new_v4(), Uuid::new_v4());

        for _ in 0..2 {
            assert!(matches!(
                uc.execute(request.clone()).await.unwrap_err(),
                DeleteUserError::ActiveVerificationAssignments
            ));
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut cascade = MockUserCascadeMock::new();
        cascade
            .expect_delete_user()
            .returning(|_| Err(UserCascadeError::DatabaseError("deadlock".to_string())));

        let uc = DeleteUserUseCase::new(Arc::new(cascade));
        let err = uc
            .execute(DeleteUserRequest::new(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteUserError::StoreError(_)));
    }
}
