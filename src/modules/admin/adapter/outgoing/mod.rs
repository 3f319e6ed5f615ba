pub mod assignment_count_query_postgres;
pub mod user_admin_query_postgres;
pub mod user_cascade_postgres;
pub mod user_repository_postgres;
