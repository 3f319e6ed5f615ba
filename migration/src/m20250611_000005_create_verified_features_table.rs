use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerifiedFeatures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerifiedFeatures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VerifiedFeatures::SourceJudgementId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerifiedFeatures::VerifiedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerifiedFeatures::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(VerifiedFeatures::Features)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerifiedFeatures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VerifiedFeatures::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One verification record per reviewer and judgement; saving again
        // overwrites it.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_verified_features_judgement_reviewer
                ON verified_features (source_judgement_id, verified_by);
                "#,
            )
            .await?;

        // The delete-user guard filters on (verified_by, is_verified).
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_verified_features_verified_by
                ON verified_features (verified_by)
                WHERE is_verified = true;
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
                DROP INDEX IF EXISTS idx_verified_features_judgement_reviewer;
                DROP INDEX IF EXISTS idx_verified_features_verified_by;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VerifiedFeatures::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VerifiedFeatures {
    Table,
    Id,
    SourceJudgementId,
    VerifiedBy,
    IsVerified,
    Features,
    CreatedAt,
    UpdatedAt,
}
