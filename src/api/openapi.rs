use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo,
};

// Admin
use crate::modules::admin::adapter::incoming::web::routes::{
    CreateUserRequestDto, CreatedUserResponse, DeleteUserResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Judgement Verification API",
        version = "1.0.0",
        description = "API for curating features extracted from drug trafficking sentencing judgements",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,

        // Admin endpoints
        crate::modules::admin::adapter::incoming::web::routes::create_user_handler,
        crate::modules::admin::adapter::incoming::web::routes::delete_user_handler,

        // Judgement endpoints
        // list_judgements_handler,
        // get_judgement_handler,
        // assign_judgement_handler,
        // save_verification_handler,
    ),
    components(schemas(
        ErrorResponse,
        ErrorDetail,
        LoginRequestDto,
        LoginResponse,
        LoginUserInfo,
        CreateUserRequestDto,
        CreatedUserResponse,
        DeleteUserResponse,
    )),
    tags(
        (name = "auth", description = "Session endpoints"),
        (name = "admin", description = "User administration (admin role required)"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Opaque session token from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
