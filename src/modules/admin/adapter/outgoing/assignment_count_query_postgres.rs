use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::assignment_count_query::{
    AssignmentCountQuery, AssignmentCountQueryError, UserAssignmentCounts,
};

#[derive(Clone, Debug)]
pub struct AssignmentCountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AssignmentCountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Per assignee: total judgements assigned, and how many of those the
    /// assignee has verified. Users with no assignments are omitted; the UI
    /// shows zero badges for anyone missing from the result.
    fn counts_stmt() -> Statement {
        Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT j.assigned_to AS user_id,
                   COUNT(DISTINCT j.id) AS assigned_count,
                   COUNT(vf.id) AS verified_count
            FROM judgements j
            LEFT JOIN verified_features vf
              ON vf.source_judgement_id = j.id
             AND vf.verified_by = j.assigned_to
             AND vf.is_verified = true
            WHERE j.assigned_to IS NOT NULL
            GROUP BY j.assigned_to
            "#,
        )
    }
}

#[async_trait]
impl AssignmentCountQuery for AssignmentCountQueryPostgres {
    async fn counts(&self) -> Result<Vec<UserAssignmentCounts>, AssignmentCountQueryError> {
        let rows = self
            .db
            .query_all(Self::counts_stmt())
            .await
            .map_err(|e| AssignmentCountQueryError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                let user_id: Uuid = row
                    .try_get("", "user_id")
                    .map_err(|e| AssignmentCountQueryError::DatabaseError(e.to_string()))?;
                let assigned: i64 = row
                    .try_get("", "assigned_count")
                    .map_err(|e| AssignmentCountQueryError::DatabaseError(e.to_string()))?;
                let verified: i64 = row
                    .try_get("", "verified_count")
                    .map_err(|e| AssignmentCountQueryError::DatabaseError(e.to_string()))?;

                Ok(UserAssignmentCounts {
                    user_id,
                    assigned: assigned as u64,
                    verified: verified as u64,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn counts_row(user_id: Uuid, assigned: i64, verified: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("user_id".to_string(), user_id.into()),
            ("assigned_count".to_string(), Value::BigInt(Some(assigned))),
            ("verified_count".to_string(), Value::BigInt(Some(verified))),
        ])
    }

    #[tokio::test]
    async fn test_counts_map_rows() {
        let busy = Uuid::new_v4();
        let idle = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                counts_row(busy, 7, 3),
                counts_row(idle, 2, 0),
            ]])
            .into_connection();

        let query = AssignmentCountQueryPostgres::new(Arc::new(db));
        let counts = query.counts().await.unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(
            counts[0],
            UserAssignmentCounts {
                user_id: busy,
                assigned: 7,
                verified: 3
            }
        );
        assert_eq!(counts[1].verified, 0);
    }

    #[tokio::test]
    async fn test_no_assignments_yields_empty_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<BTreeMap<String, Value>>::new()])
            .into_connection();

        let query = AssignmentCountQueryPostgres::new(Arc::new(db));

        assert!(query.counts().await.unwrap().is_empty());
    }
}
