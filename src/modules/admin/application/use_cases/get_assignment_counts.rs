use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::admin::application::ports::outgoing::{
    AssignmentCountQuery, AssignmentCountQueryError, UserAssignmentCounts,
};

#[derive(Debug)]
pub enum GetAssignmentCountsError {
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for GetAssignmentCountsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetAssignmentCountsError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GetAssignmentCountsError {}

#[async_trait]
pub trait IGetAssignmentCountsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserAssignmentCounts>, GetAssignmentCountsError>;
}

pub struct GetAssignmentCountsUseCase {
    count_query: Arc<dyn AssignmentCountQuery + Send + Sync>,
}

impl GetAssignmentCountsUseCase {
    pub fn new(count_query: Arc<dyn AssignmentCountQuery + Send + Sync>) -> Self {
        Self { count_query }
    }
}

#[async_trait]
impl IGetAssignmentCountsUseCase for GetAssignmentCountsUseCase {
    async fn execute(&self) -> Result<Vec<UserAssignmentCounts>, GetAssignmentCountsError> {
        self.count_query.counts().await.map_err(|e| match e {
            AssignmentCountQueryError::DatabaseError(msg) => {
                GetAssignmentCountsError::InfrastructureError(msg)
            }
        })
    }
}
