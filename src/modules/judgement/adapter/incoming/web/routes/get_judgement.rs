use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::judgement::application::use_cases::fetch_judgement::FetchJudgementError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::error;
use uuid::Uuid;

#[derive(Serialize)]
struct VerificationView {
    is_verified: bool,
    features: JsonValue,
    updated_at: String,
}

#[derive(Serialize)]
struct JudgementDetailResponse {
    id: String,
    filename: String,
    year: String,
    trial: String,
    appeal: Option<String>,
    corrigendum: Option<String>,
    html: String,
    appeal_html: Option<String>,
    corrigendum_html: Option<String>,
    extracted_features: Option<JsonValue>,
    assigned_to: Option<String>,
    /// The caller's own saved record, for prefilling the edit form.
    own_verification: Option<VerificationView>,
}

#[get("/api/judgements/{judgement_id}")]
pub async fn get_judgement_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_judgement_use_case
        .execute(path.into_inner(), user.user.user_id)
        .await
    {
        Ok(output) => {
            let judgement = output.judgement;
            ApiResponse::success(JudgementDetailResponse {
                id: judgement.id.to_string(),
                filename: judgement.filename,
                year: judgement.year,
                trial: judgement.trial,
                appeal: judgement.appeal,
                corrigendum: judgement.corrigendum,
                html: judgement.html,
                appeal_html: judgement.appeal_html,
                corrigendum_html: judgement.corrigendum_html,
                extracted_features: judgement.extracted_features,
                assigned_to: judgement.assigned_to.map(|u| u.to_string()),
                own_verification: output.own_verification.map(|v| VerificationView {
                    is_verified: v.is_verified,
                    features: v.features,
                    updated_at: v.updated_at.to_rfc3339(),
                }),
            })
        }

        Err(FetchJudgementError::JudgementNotFound) => {
            ApiResponse::not_found("JUDGEMENT_NOT_FOUND", "Judgement not found")
        }

        Err(FetchJudgementError::InfrastructureError(e)) => {
            error!("Fetch judgement failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
