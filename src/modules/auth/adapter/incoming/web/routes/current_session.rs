use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct CurrentSessionResponse {
    user_id: String,
    full_name: String,
    username: String,
    email: String,
    role: String,
}

/// The UI calls this on navigation to decide whether to redirect to sign-in
/// and whether admin screens are reachable.
#[get("/api/auth/session")]
pub async fn current_session_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(CurrentSessionResponse {
        user_id: user.user.user_id.to_string(),
        full_name: user.user.full_name,
        username: user.user.username,
        email: user.user.email,
        role: user.user.role.to_string(),
    })
}
