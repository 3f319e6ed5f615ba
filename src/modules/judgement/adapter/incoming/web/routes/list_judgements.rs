use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::judgement::application::use_cases::list_judgements::{
    ListJudgementsError, ListJudgementsInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Deserialize)]
pub struct ListJudgementsParams {
    pub page: Option<u64>,
    /// `mine=true` narrows to the caller's assignments (the reviewer
    /// work list); admins omit it to see everything.
    pub mine: Option<bool>,
}

#[derive(Serialize)]
struct JudgementListItem {
    id: String,
    filename: String,
    year: String,
    trial: String,
    appeal: Option<String>,
    corrigendum: Option<String>,
    assigned_to: Option<String>,
    verified: bool,
}

#[derive(Serialize)]
struct ListJudgementsResponse {
    judgements: Vec<JudgementListItem>,
    total: u64,
}

#[get("/api/judgements")]
pub async fn list_judgements_handler(
    user: AuthenticatedUser,
    params: web::Query<ListJudgementsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = ListJudgementsInput {
        page: params.page.unwrap_or(1),
        assigned_to: match params.mine {
            Some(true) => Some(user.user.user_id),
            _ => None,
        },
    };

    match data.list_judgements_use_case.execute(input).await {
        Ok(page) => ApiResponse::success(ListJudgementsResponse {
            judgements: page
                .judgements
                .into_iter()
                .map(|j| JudgementListItem {
                    id: j.id.to_string(),
                    filename: j.filename,
                    year: j.year,
                    trial: j.trial,
                    appeal: j.appeal,
                    corrigendum: j.corrigendum,
                    assigned_to: j.assigned_to.map(|u| u.to_string()),
                    verified: j.verified,
                })
                .collect(),
            total: page.total,
        }),

        Err(ListJudgementsError::InfrastructureError(e)) => {
            error!("List judgements failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
