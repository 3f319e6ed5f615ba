use crate::modules::admin::application::use_cases::get_assignment_counts::GetAssignmentCountsError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;

#[derive(Serialize)]
struct AssignmentCountsItem {
    assignment: u64,
    verification: u64,
}

/// Keyed by user id, the shape the admin table consumes directly.
#[get("/api/admin/users/assignment-counts")]
pub async fn assignment_counts_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_assignment_counts_use_case.execute().await {
        Ok(counts) => {
            let by_user: HashMap<String, AssignmentCountsItem> = counts
                .into_iter()
                .map(|c| {
                    (
                        c.user_id.to_string(),
                        AssignmentCountsItem {
                            assignment: c.assigned,
                            verification: c.verified,
                        },
                    )
                })
                .collect();

            ApiResponse::success(by_user)
        }

        Err(GetAssignmentCountsError::InfrastructureError(e)) => {
            error!("Assignment counts failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::modules::admin::application::ports::outgoing::UserAssignmentCounts;
    use crate::modules::admin::application::use_cases::get_assignment_counts::IGetAssignmentCountsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubResolveSessionUseCase;

    struct MockCounts {
        user_id: Uuid,
    }

    #[async_trait]
    impl IGetAssignmentCountsUseCase for MockCounts {
        async fn execute(
            &self,
        ) -> Result<Vec<UserAssignmentCounts>, GetAssignmentCountsError> {
            Ok(vec![UserAssignmentCounts {
                user_id: self.user_id,
                assigned: 4,
                verified: 1,
            }])
        }
    }

    #[actix_web::test]
    async fn test_counts_are_keyed_by_user_id() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSessionUseCase::admin())
            .with_get_assignment_counts(MockCounts { user_id })
            .build();

        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(app_state)
                .service(assignment_counts_handler),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/api/admin/users/assignment-counts")
            .insert_header(("Authorization", "Bearer admin-token"))
            .to_request();

        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        let entry = &body["data"][user_id.to_string()];
        assert_eq!(entry["assignment"], 4);
        assert_eq!(entry["verification"], 1);
    }
}
