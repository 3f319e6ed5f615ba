use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, QueryFilter,
    QueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::judgement::application::domain::entities::VerificationRecord;
use crate::modules::judgement::application::ports::outgoing::verification_repository::{
    SaveVerificationData, VerificationRepository, VerificationRepositoryError,
};

use super::sea_orm_entity::verified_features::{
    Column as VerifiedFeatureColumn, Entity as VerifiedFeatureEntity,
    Model as VerifiedFeatureModel,
};

#[derive(Clone, Debug)]
pub struct VerificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Single-statement upsert keyed on (source_judgement_id, verified_by);
    /// re-saving overwrites the payload and flag in place.
    fn upsert_stmt(data: &SaveVerificationData) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO verified_features
                (id, source_judgement_id, verified_by, is_verified, features)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (source_judgement_id, verified_by)
            DO UPDATE SET is_verified = EXCLUDED.is_verified,
                          features = EXCLUDED.features,
                          updated_at = CURRENT_TIMESTAMP
            RETURNING id, source_judgement_id, verified_by, is_verified, features, updated_at
            "#,
            vec![
                Uuid::new_v4().into(),
                data.source_judgement_id.into(),
                data.verified_by.into(),
                data.is_verified.into(),
                data.features.clone().into(),
            ],
        )
    }

    fn map_row(row: QueryResult) -> Result<VerificationRecord, VerificationRepositoryError> {
        let map_err =
            |e: sea_orm::DbErr| VerificationRepositoryError::DatabaseError(e.to_string());

        Ok(VerificationRecord {
            id: row.try_get("", "id").map_err(map_err)?,
            source_judgement_id: row
                .try_get("", "source_judgement_id")
                .map_err(map_err)?,
            verified_by: row.try_get("", "verified_by").map_err(map_err)?,
            is_verified: row.try_get("", "is_verified").map_err(map_err)?,
            features: row.try_get("", "features").map_err(map_err)?,
            updated_at: row
                .try_get::<chrono::DateTime<chrono::FixedOffset>>("", "updated_at")
                .map_err(map_err)?
                .with_timezone(&chrono::Utc),
        })
    }

    fn map_model(model: VerifiedFeatureModel) -> VerificationRecord {
        VerificationRecord {
            id: model.id,
            source_judgement_id: model.source_judgement_id,
            verified_by: model.verified_by,
            is_verified: model.is_verified,
            features: model.features,
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl VerificationRepository for VerificationRepositoryPostgres {
    async fn upsert(
        &self,
        data: SaveVerificationData,
    ) -> Result<VerificationRecord, VerificationRepositoryError> {
        let row = self
            .db
            .query_one(Self::upsert_stmt(&data))
            .await
            .map_err(|e| VerificationRepositoryError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                VerificationRepositoryError::DatabaseError(
                    "Upsert returned no rows".to_string(),
                )
            })?;

        Self::map_row(row)
    }

    async fn find_for_reviewer(
        &self,
        judgement_id: Uuid,
        reviewer_id: Uuid,
    ) -> Result<Option<VerificationRecord>, VerificationRepositoryError> {
        let record = VerifiedFeatureEntity::find()
            .filter(VerifiedFeatureColumn::SourceJudgementId.eq(judgement_id))
            .filter(VerifiedFeatureColumn::VerifiedBy.eq(reviewer_id))
            .one(&*self.db)
            .await
            .map_err(|e| VerificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(record.map(Self::map_model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn record_row(judgement_id: Uuid, reviewer_id: Uuid, verified: bool) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("id".to_string(), Uuid::new_v4().into()),
            ("source_judgement_id".to_string(), judgement_id.into()),
            ("verified_by".to_string(), reviewer_id.into()),
            ("is_verified".to_string(), verified.into()),
            (
                "features".to_string(),
                serde_json::json!({"defendants": []}).into(),
            ),
            (
                "updated_at".to_string(),
                Value::ChronoDateTimeWithTimeZone(Some(Box::new(Utc::now().into()))),
            ),
        ])
    }

    #[tokio::test]
    async fn test_upsert_returns_stored_record() {
        let judgement_id = Uuid::new_v4();
        let reviewer_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![record_row(judgement_id, reviewer_id, true)]])
            .into_connection();

        let repo = VerificationRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .upsert(SaveVerificationData {
                source_judgement_id: judgement_id,
                verified_by: reviewer_id,
                features: serde_json::json!({"defendants": []}),
                is_verified: true,
            })
            .await
            .unwrap();

        assert_eq!(record.source_judgement_id, judgement_id);
        assert_eq!(record.verified_by, reviewer_id);
        assert!(record.is_verified);
    }

    #[tokio::test]
    async fn test_find_for_reviewer_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<VerifiedFeatureModel>::new()])
            .into_connection();

        let repo = VerificationRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .find_for_reviewer(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert!(record.is_none());
    }
}
