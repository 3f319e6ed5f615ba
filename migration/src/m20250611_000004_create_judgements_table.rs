use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Judgements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Judgements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Judgements::Filename)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Judgements::Year).string_len(4).not_null())
                    .col(ColumnDef::new(Judgements::Trial).string_len(50).not_null())
                    .col(ColumnDef::new(Judgements::Appeal).string_len(50))
                    .col(ColumnDef::new(Judgements::Corrigendum).string_len(50))
                    .col(ColumnDef::new(Judgements::Html).text().not_null())
                    .col(ColumnDef::new(Judgements::AppealHtml).text())
                    .col(ColumnDef::new(Judgements::CorrigendumHtml).text())
                    .col(ColumnDef::new(Judgements::ExtractedFeatures).json_binary())
                    .col(ColumnDef::new(Judgements::AssignedTo).uuid())
                    .col(
                        ColumnDef::new(Judgements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Judgements::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // assigned_to is a weak reference: cleared (never cascaded) when the
        // assignee is deleted, so judgements outlive users.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_judgements_assigned_to
                ON judgements (assigned_to)
                WHERE assigned_to IS NOT NULL;
                "#,
            )
            .await?;

        // Reviewer work lists are newest-first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_judgements_created_at
                ON judgements (created_at DESC);
                "#,
            )
            .await?;

        // One source document per trial reference and year.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_judgements_year_trial
                ON judgements (year, trial);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_judgements_assigned_to;
                DROP INDEX IF EXISTS idx_judgements_created_at;
                DROP INDEX IF EXISTS idx_judgements_year_trial;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Judgements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Judgements {
    Table,
    Id,
    Filename,
    Year,
    Trial,
    Appeal,
    Corrigendum,
    Html,
    AppealHtml,
    CorrigendumHtml,
    ExtractedFeatures,
    AssignedTo,
    CreatedAt,
    UpdatedAt,
}
