pub use sea_orm_migration::prelude::*;

mod m20250604_000001_create_users_table;
mod m20250604_000002_create_sessions_table;
mod m20250604_000003_create_accounts_table;
mod m20250611_000004_create_judgements_table;
mod m20250611_000005_create_verified_features_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250604_000001_create_users_table::Migration),
            Box::new(m20250604_000002_create_sessions_table::Migration),
            Box::new(m20250604_000003_create_accounts_table::Migration),
            Box::new(m20250611_000004_create_judgements_table::Migration),
            Box::new(m20250611_000005_create_verified_features_table::Migration),
        ]
    }
}
