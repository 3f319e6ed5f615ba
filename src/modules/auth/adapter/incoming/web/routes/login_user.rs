use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "reviewer@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque session token; send as `Authorization: Bearer <token>`
    #[schema(example = "7f9c2ba4e88f827d616045507605853e")]
    session_token: String,

    /// Session expiry (RFC 3339)
    expires_at: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "jane.reviewer")]
    username: String,

    /// Email address
    #[schema(example = "reviewer@example.com")]
    email: String,

    /// Role, either "user" or "admin"
    #[schema(example = "user")]
    role: String,
}

/// User login
///
/// Authenticates a reviewer or admin with email and password and opens a
/// server-side session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.user_id,
                username = %response.user.username,
                "User logged in"
            );

            ApiResponse::success(LoginResponse {
                session_token: response.session_token,
                expires_at: response.expires_at.to_rfc3339(),
                user: LoginUserInfo {
                    id: response.user.user_id.to_string(),
                    username: response.user.username,
                    email: response.user.email,
                    role: response.user.role.to_string(),
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Rejected login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::InfrastructureError(e)) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
