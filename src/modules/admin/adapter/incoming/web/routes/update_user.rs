use crate::modules::admin::application::use_cases::update_user::{
    UpdateUserError, UpdateUserInput,
};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct UpdateUserRequestDto {
    pub name: String,
    pub email: String,
    pub username: String,
}

#[derive(Serialize)]
struct UpdatedUserResponse {
    id: String,
    name: String,
    email: String,
    username: String,
    role: String,
}

#[patch("/api/admin/users/{user_id}")]
pub async fn update_user_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let input = UpdateUserInput {
        user_id: path.into_inner(),
        full_name: dto.name,
        email: dto.email,
        username: dto.username,
    };

    match data.update_user_use_case.execute(input).await {
        Ok(user) => ApiResponse::success(UpdatedUserResponse {
            id: user.id.to_string(),
            name: user.full_name,
            email: user.email,
            username: user.username,
            role: user.role.to_string(),
        }),

        Err(UpdateUserError::ValidationError(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateUserError::UserAlreadyExists) => ApiResponse::conflict(
            "USER_ALREADY_EXISTS",
            "A user with this email or username already exists",
        ),

        Err(UpdateUserError::InfrastructureError(e)) => {
            error!("Update user failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
