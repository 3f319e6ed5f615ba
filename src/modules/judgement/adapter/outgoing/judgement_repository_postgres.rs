use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::judgement::application::ports::outgoing::judgement_repository::{
    JudgementRepository, JudgementRepositoryError,
};

use super::sea_orm_entity::judgements::{
    ActiveModel as JudgementActiveModel, Entity as JudgementEntity,
};

#[derive(Clone, Debug)]
pub struct JudgementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JudgementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JudgementRepository for JudgementRepositoryPostgres {
    async fn set_assignee(
        &self,
        judgement_id: Uuid,
        assignee: Option<Uuid>,
    ) -> Result<(), JudgementRepositoryError> {
        let judgement = JudgementEntity::find_by_id(judgement_id)
            .one(&*self.db)
            .await
            .map_err(|e| JudgementRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(JudgementRepositoryError::JudgementNotFound)?;

        let mut active_judgement: JudgementActiveModel = judgement.into();
        active_judgement.assigned_to = Set(assignee);

        active_judgement
            .update(&*self.db)
            .await
            .map_err(|e| JudgementRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
