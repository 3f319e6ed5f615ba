use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::judgement::application::use_cases::save_verification::{
    ISaveVerificationUseCase, SaveVerificationError, SaveVerificationInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::error;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct SaveVerificationDto {
    pub features: JsonValue,
    pub is_verified: bool,
}

#[derive(Serialize)]
struct SavedVerificationResponse {
    id: String,
    source_judgement_id: String,
    verified_by: String,
    is_verified: bool,
    updated_at: String,
}

#[put("/api/judgements/{judgement_id}/verification")]
pub async fn save_verification_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SaveVerificationDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let input = SaveVerificationInput {
        judgement_id: path.into_inner(),
        reviewer_id: user.user.user_id,
        features: dto.features,
        is_verified: dto.is_verified,
    };

    match data.save_verification_use_case.execute(input).await {
        Ok(record) => ApiResponse::success(SavedVerificationResponse {
            id: record.id.to_string(),
            source_judgement_id: record.source_judgement_id.to_string(),
            verified_by: record.verified_by.to_string(),
            is_verified: record.is_verified,
            updated_at: record.updated_at.to_rfc3339(),
        }),

        Err(SaveVerificationError::JudgementNotFound) => {
            ApiResponse::not_found("JUDGEMENT_NOT_FOUND", "Judgement not found")
        }

        Err(SaveVerificationError::NotAssigned) => ApiResponse::forbidden(
            "NOT_ASSIGNED",
            "Judgement is not assigned to this reviewer",
        ),

        Err(SaveVerificationError::InfrastructureError(e)) => {
            error!("Save verification failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
