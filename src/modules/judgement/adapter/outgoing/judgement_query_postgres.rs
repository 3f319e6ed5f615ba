use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, QueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::judgement::application::domain::entities::{
    JudgementDetail, JudgementSummary,
};
use crate::modules::judgement::application::ports::outgoing::judgement_query::{
    JudgementPage, JudgementQuery, JudgementQueryError,
};

use super::sea_orm_entity::judgements::{Entity as JudgementEntity, Model as JudgementModel};

#[derive(Clone, Debug)]
pub struct JudgementQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JudgementQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// The `verified` flag folds the verification records in, so the list
    /// does not need a second round trip per row.
    fn list_stmt(assigned_to: Option<Uuid>, limit: u64, offset: u64) -> Statement {
        match assigned_to {
            Some(user_id) => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                SELECT j.id, j.filename, j.year, j.trial, j.appeal, j.corrigendum,
                       j.assigned_to, j.created_at,
                       EXISTS (
                         SELECT 1 FROM verified_features vf
                         WHERE vf.source_judgement_id = j.id
                           AND vf.is_verified = true
                       ) AS verified
                FROM judgements j
                WHERE j.assigned_to = $1
                ORDER BY j.created_at DESC
                LIMIT $2 OFFSET $3
                "#,
                vec![user_id.into(), (limit as i64).into(), (offset as i64).into()],
            ),
            None => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                SELECT j.id, j.filename, j.year, j.trial, j.appeal, j.corrigendum,
                       j.assigned_to, j.created_at,
                       EXISTS (
                         SELECT 1 FROM verified_features vf
                         WHERE vf.source_judgement_id = j.id
                           AND vf.is_verified = true
                       ) AS verified
                FROM judgements j
                ORDER BY j.created_at DESC
                LIMIT $1 OFFSET $2
                "#,
                vec![(limit as i64).into(), (offset as i64).into()],
            ),
        }
    }

    fn count_stmt(assigned_to: Option<Uuid>) -> Statement {
        match assigned_to {
            Some(user_id) => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "SELECT COUNT(*) AS total FROM judgements WHERE assigned_to = $1",
                vec![user_id.into()],
            ),
            None => Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT COUNT(*) AS total FROM judgements",
            ),
        }
    }

    fn map_row(row: QueryResult) -> Result<JudgementSummary, JudgementQueryError> {
        let map_err = |e: sea_orm::DbErr| JudgementQueryError::DatabaseError(e.to_string());

        Ok(JudgementSummary {
            id: row.try_get("", "id").map_err(map_err)?,
            filename: row.try_get("", "filename").map_err(map_err)?,
            year: row.try_get("", "year").map_err(map_err)?,
            trial: row.try_get("", "trial").map_err(map_err)?,
            appeal: row.try_get("", "appeal").map_err(map_err)?,
            corrigendum: row.try_get("", "corrigendum").map_err(map_err)?,
            assigned_to: row.try_get("", "assigned_to").map_err(map_err)?,
            verified: row.try_get("", "verified").map_err(map_err)?,
            created_at: row
                .try_get::<chrono::DateTime<chrono::FixedOffset>>("", "created_at")
                .map_err(map_err)?
                .with_timezone(&chrono::Utc),
        })
    }

    fn map_to_detail(model: JudgementModel) -> JudgementDetail {
        JudgementDetail {
            id: model.id,
            filename: model.filename,
            year: model.year,
            trial: model.trial,
            appeal: model.appeal,
            corrigendum: model.corrigendum,
            html: model.html,
            appeal_html: model.appeal_html,
            corrigendum_html: model.corrigendum_html,
            extracted_features: model.extracted_features,
            assigned_to: model.assigned_to,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl JudgementQuery for JudgementQueryPostgres {
    async fn list_judgements(
        &self,
        page: u64,
        per_page: u64,
        assigned_to: Option<Uuid>,
    ) -> Result<JudgementPage, JudgementQueryError> {
        let offset = page.saturating_sub(1) * per_page;

        let total_row = self
            .db
            .query_one(Self::count_stmt(assigned_to))
            .await
            .map_err(|e| JudgementQueryError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                JudgementQueryError::DatabaseError("Count query returned no rows".to_string())
            })?;

        let total: i64 = total_row
            .try_get("", "total")
            .map_err(|e| JudgementQueryError::DatabaseError(e.to_string()))?;

        let rows = self
            .db
            .query_all(Self::list_stmt(assigned_to, per_page, offset))
            .await
            .map_err(|e| JudgementQueryError::DatabaseError(e.to_string()))?;

        let judgements = rows
            .into_iter()
            .map(Self::map_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(JudgementPage {
            judgements,
            total: total as u64,
        })
    }

    async fn find_by_id(
        &self,
        judgement_id: Uuid,
    ) -> Result<Option<JudgementDetail>, JudgementQueryError> {
        let judgement = JudgementEntity::find_by_id(judgement_id)
            .one(&*self.db)
            .await
            .map_err(|e| JudgementQueryError::DatabaseError(e.to_string()))?;

        Ok(judgement.map(Self::map_to_detail))
    }
}
