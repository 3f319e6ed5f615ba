pub mod judgement_query_postgres;
pub mod judgement_repository_postgres;
pub mod sea_orm_entity;
pub mod verification_repository_postgres;
