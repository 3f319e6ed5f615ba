use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::use_cases::delete_user::{
    DeleteUserError, DeleteUserRequest,
};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct DeleteUserResponse {
    /// Mirrors the RPC contract the UI expects: `{success: true}`.
    #[schema(example = true)]
    success: bool,
}

/// Delete a user
///
/// Removes the user together with their sessions, credential accounts, and
/// assignment marks, as one transaction. Fails with a conflict while any
/// judgement is both assigned to the user and verified by them. Admin only.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    tag = "admin",
    params(
        ("user_id" = Uuid, Path, description = "Id of the user to delete")
    ),
    responses(
        (
            status = 200,
            description = "User deleted (or already absent)",
            body = inline(SuccessResponse<DeleteUserResponse>),
        ),
        (
            status = 401,
            description = "No valid session",
            body = ErrorResponse,
        ),
        (
            status = 403,
            description = "Caller is not an admin",
            body = ErrorResponse,
        ),
        (
            status = 409,
            description = "User still has verified assignments",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACTIVE_VERIFICATION_ASSIGNMENTS",
                    "message": "Cannot delete user with active verification assignments"
                }
            })
        ),
        (
            status = 500,
            description = "Transaction failed and was rolled back",
            body = ErrorResponse,
        ),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/users/{user_id}")]
pub async fn delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_user_id = path.into_inner();
    let request = DeleteUserRequest::new(target_user_id, admin.user.user_id);

    match data.delete_user_use_case.execute(request).await {
        Ok(()) => ApiResponse::success(DeleteUserResponse { success: true }),

        Err(DeleteUserError::ActiveVerificationAssignments) => ApiResponse::conflict(
            "ACTIVE_VERIFICATION_ASSIGNMENTS",
            "Cannot delete user with active verification assignments",
        ),

        Err(DeleteUserError::StoreError(e)) => {
            error!(target_user_id = %target_user_id, "Delete user failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::modules::admin::application::use_cases::delete_user::IDeleteUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubResolveSessionUseCase;

    // ==========================================================
    // Mocks
    // ==========================================================

    struct MockDeleteUserSuccess;

    #[async_trait]
    impl IDeleteUserUseCase for MockDeleteUserSuccess {
        async fn execute(&self, _request: DeleteUserRequest) -> Result<(), DeleteUserError> {
            Ok(())
        }
    }

    struct MockDeleteUserConflict;

    #[async_trait]
    impl IDeleteUserUseCase for MockDeleteUserConflict {
        async fn execute(&self, _request: DeleteUserRequest) -> Result<(), DeleteUserError> {
            Err(DeleteUserError::ActiveVerificationAssignments)
        }
    }

    struct MockDeleteUserStoreError;

    #[async_trait]
    impl IDeleteUserUseCase for MockDeleteUserStoreError {
        async fn execute(&self, _request: DeleteUserRequest) -> Result<(), DeleteUserError> {
            Err(DeleteUserError::StoreError(
                "could not serialize access".to_string(),
            ))
        }
    }

    /// Counts executions so authorization tests can assert zero writes.
    struct CountingDeleteUser {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl IDeleteUserUseCase for CountingDeleteUser {
        async fn execute(&self, _request: DeleteUserRequest) -> Result<(), DeleteUserError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    async fn call_delete(
        app_state: actix_web::web::Data<crate::AppState>,
        with_header: bool,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(app_state)
                .service(delete_user_handler),
        )
        .await;

        let mut req = actix_web::test::TestRequest::delete()
            .uri(&format!("/api/admin/users/{}", Uuid::new_v4()));
        if with_header {
            req = req.insert_header(("Authorization", "Bearer admin-token"));
        }

        actix_web::test::call_service(&app, req.to_request()).await
    }

    // ==========================================================
    // Tests
    // ==========================================================

    #[actix_web::test]
    async fn test_delete_user_success() {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSessionUseCase::admin())
            .with_delete_user(MockDeleteUserSuccess)
            .build();

        let resp = call_delete(app_state, true).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["success"], true);
    }

    #[actix_web::test]
    async fn test_delete_user_conflict_carries_guard_message() {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSessionUseCase::admin())
            .with_delete_user(MockDeleteUserConflict)
            .build();

        let resp = call_delete(app_state, true).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);

        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "ACTIVE_VERIFICATION_ASSIGNMENTS");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("active verification assignments"));
    }

    #[actix_web::test]
    async fn test_delete_user_as_reviewer_is_forbidden_with_zero_writes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSessionUseCase::reviewer())
            .with_delete_user(CountingDeleteUser {
                calls: calls.clone(),
            })
            .build();

        let resp = call_delete(app_state, true).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_delete_user_without_session_is_unauthorized_with_zero_writes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app_state = TestAppStateBuilder::default()
            .with_delete_user(CountingDeleteUser {
                calls: calls.clone(),
            })
            .build();

        let resp = call_delete(app_state, false).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_delete_user_store_error_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSessionUseCase::admin())
            .with_delete_user(MockDeleteUserStoreError)
            .build();

        let resp = call_delete(app_state, true).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );

        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
