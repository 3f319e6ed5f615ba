pub mod account_query_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod session_query_postgres;
pub mod session_repository_postgres;
pub mod user_query_postgres;
