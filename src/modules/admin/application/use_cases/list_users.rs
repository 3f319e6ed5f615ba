use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::admin::application::ports::outgoing::{
    UserAdminQuery, UserAdminQueryError, UserPage,
};

/// Matches the admin table's page size.
pub const USERS_PER_PAGE: u64 = 20;

#[derive(Debug)]
pub enum ListUsersError {
    InfrastructureError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for ListUsersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListUsersError::InfrastructureError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ListUsersError {}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self, page: u64) -> Result<UserPage, ListUsersError>;
}

pub struct ListUsersUseCase {
    user_admin_query: Arc<dyn UserAdminQuery + Send + Sync>,
}

impl ListUsersUseCase {
    pub fn new(user_admin_query: Arc<dyn UserAdminQuery + Send + Sync>) -> Self {
        Self { user_admin_query }
    }
}

#[async_trait]
impl IListUsersUseCase for ListUsersUseCase {
    async fn execute(&self, page: u64) -> Result<UserPage, ListUsersError> {
        let page = page.max(1);

        self.user_admin_query
            .list_users(page, USERS_PER_PAGE)
            .await
            .map_err(|e| match e {
                UserAdminQueryError::DatabaseError(msg) => {
                    ListUsersError::InfrastructureError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingQuery {
        pages: Mutex<Vec<(u64, u64)>>,
    }

    #[async_trait]
    impl UserAdminQuery for RecordingQuery {
        async fn list_users(
            &self,
            page: u64,
            per_page: u64,
        ) -> Result<UserPage, UserAdminQueryError> {
            self.pages.lock().unwrap().push((page, per_page));
            Ok(UserPage {
                users: vec![],
                total: 0,
            })
        }
    }

    #[tokio::test]
    async fn test_page_zero_is_clamped_to_one() {
        let query = Arc::new(RecordingQuery {
            pages: Mutex::new(vec![]),
        });
        let uc = ListUsersUseCase::new(query.clone());

        uc.execute(0).await.unwrap();

        assert_eq!(*query.pages.lock().unwrap(), vec![(1, USERS_PER_PAGE)]);
    }
}
