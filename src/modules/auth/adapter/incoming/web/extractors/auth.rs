use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::modules::auth::application::domain::entities::SessionUser;
use crate::modules::auth::application::use_cases::resolve_session::ResolveSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A caller with a live session. Resolution goes through the session
/// use case, so expiry and deleted-user handling live in one place.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: SessionUser,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let data = match req.app_data::<web::Data<AppState>>() {
                Some(data) => data,
                None => {
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            let token = match extract_token_from_header(&req) {
                Some(t) => t,
                None => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "MISSING_AUTH_HEADER",
                        "Missing or invalid authorization header",
                    )));
                }
            };

            match data.resolve_session_use_case.execute(&token).await {
                Ok(user) => Ok(AuthenticatedUser { user }),
                Err(ResolveSessionError::SessionNotFound) => {
                    Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_SESSION",
                        "Invalid or expired session",
                    )))
                }
                Err(ResolveSessionError::InfrastructureError(e)) => {
                    tracing::error!("Session resolution failed: {}", e);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// The single role predicate for admin-only routes. Requiring this type in a
/// handler signature is the authorization gate: no handler body runs, and no
/// write can happen, for a caller that is not an admin.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: SessionUser,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user_future = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let auth_user = auth_user_future.await?;

            if !auth_user.user.role.is_admin() {
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Admin access required",
                )));
            }

            Ok(AdminUser {
                user: auth_user.user,
            })
        })
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
