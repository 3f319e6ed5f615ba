use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::use_cases::create_user::{
    CreateUserError, CreateUserInput,
};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::auth::application::domain::entities::UserRole;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequestDto {
    /// Full name shown in the admin table
    #[schema(example = "Jane Reviewer")]
    pub name: String,

    /// Email address (unique)
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Optional; defaults to the dotted lower-case name
    #[schema(example = "jane.reviewer")]
    pub username: Option<String>,

    /// "user" or "admin"; anything else is treated as "user"
    #[schema(example = "user")]
    pub role: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: String,
}

/// Create a user
///
/// Provisions a reviewer (or admin) account. The initial password equals the
/// username. Admin only.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "admin",
    request_body = CreateUserRequestDto,
    responses(
        (
            status = 201,
            description = "User created",
            body = inline(SuccessResponse<CreatedUserResponse>),
        ),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
        ),
        (
            status = 409,
            description = "Email or username already taken",
            body = ErrorResponse,
        ),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/users")]
pub async fn create_user_handler(
    admin: AdminUser,
    req: web::Json<CreateUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let input = CreateUserInput {
        full_name: dto.name,
        email: dto.email,
        username: dto.username,
        role: UserRole::parse(&dto.role),
    };

    match data.create_user_use_case.execute(input).await {
        Ok(user) => {
            info!(
                created_by = %admin.user.user_id,
                user_id = %user.id,
                "Admin created user"
            );

            ApiResponse::created(CreatedUserResponse {
                id: user.id.to_string(),
                name: user.full_name,
                email: user.email,
                username: user.username,
                role: user.role.to_string(),
            })
        }

        Err(CreateUserError::ValidationError(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateUserError::UserAlreadyExists) => ApiResponse::conflict(
            "USER_ALREADY_EXISTS",
            "A user with this email or username already exists",
        ),

        Err(CreateUserError::InfrastructureError(e)) => {
            error!("Create user failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
