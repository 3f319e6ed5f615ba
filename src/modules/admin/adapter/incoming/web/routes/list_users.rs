use crate::modules::admin::application::use_cases::list_users::ListUsersError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Deserialize)]
pub struct ListUsersParams {
    pub page: Option<u64>,
}

#[derive(Serialize)]
struct UserListItem {
    id: String,
    name: String,
    email: String,
    username: String,
    role: String,
}

#[derive(Serialize)]
struct ListUsersResponse {
    users: Vec<UserListItem>,
    total: u64,
}

#[get("/api/admin/users")]
pub async fn list_users_handler(
    _admin: AdminUser,
    params: web::Query<ListUsersParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);

    match data.list_users_use_case.execute(page).await {
        Ok(page_result) => ApiResponse::success(ListUsersResponse {
            users: page_result
                .users
                .into_iter()
                .map(|u| UserListItem {
                    id: u.id.to_string(),
                    name: u.full_name,
                    email: u.email,
                    username: u.username,
                    role: u.role.to_string(),
                })
                .collect(),
            total: page_result.total,
        }),

        Err(ListUsersError::InfrastructureError(e)) => {
            error!("List users failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
