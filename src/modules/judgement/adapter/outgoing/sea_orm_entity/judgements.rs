use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// One judgement document per (year, trial). The ingest pipeline attaches
/// appeal and corrigendum variants to the trial row instead of creating
/// separate rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "judgements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub filename: String,
    pub year: String,
    pub trial: String,
    pub appeal: Option<String>,
    pub corrigendum: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub html: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub appeal_html: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub corrigendum_html: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub extracted_features: Option<Json>,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
