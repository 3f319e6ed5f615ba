use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::judgement::application::use_cases::assign_judgement::{
    AssignJudgementError, AssignJudgementInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct AssignJudgementDto {
    /// Omit or null to unassign.
    pub user_id: Option<Uuid>,
}

#[post("/api/admin/judgements/{judgement_id}/assign")]
pub async fn assign_judgement_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<AssignJudgementDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = AssignJudgementInput {
        judgement_id: path.into_inner(),
        assignee: req.into_inner().user_id,
    };

    match data.assign_judgement_use_case.execute(input).await {
        Ok(()) => ApiResponse::no_content(),

        Err(AssignJudgementError::JudgementNotFound) => {
            ApiResponse::not_found("JUDGEMENT_NOT_FOUND", "Judgement not found")
        }

        Err(AssignJudgementError::InfrastructureError(e)) => {
            error!("Assign judgement failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::judgement::application::use_cases::assign_judgement::IAssignJudgementUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubResolveSessionUseCase;

    struct MockAssignSuccess;

    #[async_trait]
    impl IAssignJudgementUseCase for MockAssignSuccess {
        async fn execute(&self, _input: AssignJudgementInput) -> Result<(), AssignJudgementError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_assign_succeeds_for_admin() {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSessionUseCase::admin())
            .with_assign_judgement(MockAssignSuccess)
            .build();

        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(app_state)
                .service(assign_judgement_handler),
        )
        .await;

        let req = actix_web::test::TestRequest::post()
            .uri(&format!(
                "/api/admin/judgements/{}/assign",
                Uuid::new_v4()
            ))
            .insert_header(("Authorization", "Bearer admin-token"))
            .set_json(serde_json::json!({ "user_id": Uuid::new_v4() }))
            .to_request();

        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_assign_is_admin_only() {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSessionUseCase::reviewer())
            .with_assign_judgement(MockAssignSuccess)
            .build();

        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(app_state)
                .service(assign_judgement_handler),
        )
        .await;

        let req = actix_web::test::TestRequest::post()
            .uri(&format!(
                "/api/admin/judgements/{}/assign",
                Uuid::new_v4()
            ))
            .insert_header(("Authorization", "Bearer user-token"))
            .set_json(serde_json::json!({ "user_id": null }))
            .to_request();

        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);
    }
}
