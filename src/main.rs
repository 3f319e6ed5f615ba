pub mod modules;
pub use modules::admin;
pub use modules::auth;
pub use modules::judgement;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::account_query_postgres::AccountQueryPostgres;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::session_query_postgres::SessionQueryPostgres;
use crate::auth::adapter::outgoing::session_repository_postgres::SessionRepositoryPostgres;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUserUseCase, LogoutUserUseCase},
    resolve_session::{IResolveSessionUseCase, ResolveSessionUseCase},
};

use crate::admin::adapter::outgoing::assignment_count_query_postgres::AssignmentCountQueryPostgres;
use crate::admin::adapter::outgoing::user_admin_query_postgres::UserAdminQueryPostgres;
use crate::admin::adapter::outgoing::user_cascade_postgres::UserCascadePostgres;
use crate::admin::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::admin::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    get_assignment_counts::{GetAssignmentCountsUseCase, IGetAssignmentCountsUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};

use crate::judgement::adapter::outgoing::judgement_query_postgres::JudgementQueryPostgres;
use crate::judgement::adapter::outgoing::judgement_repository_postgres::JudgementRepositoryPostgres;
use crate::judgement::adapter::outgoing::verification_repository_postgres::VerificationRepositoryPostgres;
use crate::judgement::application::use_cases::{
    assign_judgement::{AssignJudgementUseCase, IAssignJudgementUseCase},
    fetch_judgement::{FetchJudgementUseCase, IFetchJudgementUseCase},
    list_judgements::{IListJudgementsUseCase, ListJudgementsUseCase},
    save_verification::{ISaveVerificationUseCase, SaveVerificationUseCase},
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    // Auth
    pub resolve_session_use_case: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUserUseCase + Send + Sync>,
    // Admin
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub get_assignment_counts_use_case: Arc<dyn IGetAssignmentCountsUseCase + Send + Sync>,
    // Judgements
    pub list_judgements_use_case: Arc<dyn IListJudgementsUseCase + Send + Sync>,
    pub fetch_judgement_use_case: Arc<dyn IFetchJudgementUseCase + Send + Sync>,
    pub assign_judgement_use_case: Arc<dyn IAssignJudgementUseCase + Send + Sync>,
    pub save_verification_use_case: Arc<dyn ISaveVerificationUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // Sessions default to 7 days; reviewers work in long sittings.
    let session_ttl_seconds: i64 = env::var("SESSION_TTL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7 * 24 * 3600);

    let server_url = format!("{host}:{port}");

    // Database connection pool, created once and injected everywhere.
    // acquire/connect: 5s, idle: 300s, max lifetime: 1800s.
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth components
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let session_repo = SessionRepositoryPostgres::new(Arc::clone(&db_arc));
    let session_query = SessionQueryPostgres::new(Arc::clone(&db_arc));
    let password_hasher = Arc::new(Argon2Hasher::from_env());

    let resolve_session_use_case = ResolveSessionUseCase::new(
        Arc::new(session_query),
        Arc::new(user_query.clone()),
    );
    let login_user_use_case = LoginUserUseCase::new(
        Arc::new(user_query),
        Arc::new(account_query),
        password_hasher.clone(),
        Arc::new(session_repo.clone()),
        session_ttl_seconds,
    );
    let logout_user_use_case = LogoutUserUseCase::new(Arc::new(session_repo));

    // Admin components
    let user_admin_query = UserAdminQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_cascade = UserCascadePostgres::new(Arc::clone(&db_arc));
    let assignment_counts = AssignmentCountQueryPostgres::new(Arc::clone(&db_arc));

    let list_users_use_case = ListUsersUseCase::new(Arc::new(user_admin_query));
    let create_user_use_case =
        CreateUserUseCase::new(Arc::new(user_repo.clone()), password_hasher);
    let update_user_use_case = UpdateUserUseCase::new(Arc::new(user_repo));
    let delete_user_use_case = DeleteUserUseCase::new(Arc::new(user_cascade));
    let get_assignment_counts_use_case =
        GetAssignmentCountsUseCase::new(Arc::new(assignment_counts));

    // Judgement components
    let judgement_query = Arc::new(JudgementQueryPostgres::new(Arc::clone(&db_arc)));
    let judgement_repo = JudgementRepositoryPostgres::new(Arc::clone(&db_arc));
    let verification_repo = Arc::new(VerificationRepositoryPostgres::new(Arc::clone(&db_arc)));

    let list_judgements_use_case = ListJudgementsUseCase::new(judgement_query.clone());
    let fetch_judgement_use_case =
        FetchJudgementUseCase::new(judgement_query.clone(), verification_repo.clone());
    let assign_judgement_use_case = AssignJudgementUseCase::new(Arc::new(judgement_repo));
    let save_verification_use_case =
        SaveVerificationUseCase::new(judgement_query, verification_repo);

    let state = AppState {
        resolve_session_use_case: Arc::new(resolve_session_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        create_user_use_case: Arc::new(create_user_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        get_assignment_counts_use_case: Arc::new(get_assignment_counts_use_case),
        list_judgements_use_case: Arc::new(list_judgements_use_case),
        fetch_judgement_use_case: Arc::new(fetch_judgement_use_case),
        assign_judgement_use_case: Arc::new(assign_judgement_use_case),
        save_verification_use_case: Arc::new(save_verification_use_case),
    };

    info!("Server run on: {}", server_url);

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_session_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::delete_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::assignment_counts_handler);
    // Judgements
    cfg.service(crate::judgement::adapter::incoming::web::routes::list_judgements_handler);
    cfg.service(crate::judgement::adapter::incoming::web::routes::get_judgement_handler);
    cfg.service(crate::judgement::adapter::incoming::web::routes::assign_judgement_handler);
    cfg.service(crate::judgement::adapter::incoming::web::routes::save_verification_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
