use crate::modules::auth::adapter::incoming::web::extractors::auth::{
    extract_token_from_header, AuthenticatedUser,
};
use crate::modules::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    _user: AuthenticatedUser,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    // The extractor already proved the header is present and well-formed.
    let token = match extract_token_from_header(&req) {
        Some(t) => t,
        None => return ApiResponse::internal_error(),
    };

    match data.logout_user_use_case.execute(&token).await {
        Ok(()) => ApiResponse::no_content(),

        Err(LogoutError::InfrastructureError(e)) => {
            error!("Logout failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
