use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::{
    UserAssignmentCounts, UserPage, UserRecord,
};
use crate::modules::admin::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, ICreateUserUseCase,
};
use crate::modules::admin::application::use_cases::delete_user::{
    DeleteUserError, DeleteUserRequest, IDeleteUserUseCase,
};
use crate::modules::admin::application::use_cases::get_assignment_counts::{
    GetAssignmentCountsError, IGetAssignmentCountsUseCase,
};
use crate::modules::admin::application::use_cases::list_users::{
    IListUsersUseCase, ListUsersError,
};
use crate::modules::admin::application::use_cases::update_user::{
    IUpdateUserUseCase, UpdateUserError, UpdateUserInput,
};
use crate::modules::auth::application::domain::entities::{SessionUser, UserRole};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::auth::application::use_cases::logout_user::{
    ILogoutUserUseCase, LogoutError,
};
use crate::modules::auth::application::use_cases::resolve_session::{
    IResolveSessionUseCase, ResolveSessionError,
};
use crate::modules::judgement::application::domain::entities::VerificationRecord;
use crate::modules::judgement::application::ports::outgoing::JudgementPage;
use crate::modules::judgement::application::use_cases::assign_judgement::{
    AssignJudgementError, AssignJudgementInput, IAssignJudgementUseCase,
};
use crate::modules::judgement::application::use_cases::fetch_judgement::{
    FetchJudgementError, FetchJudgementOutput, IFetchJudgementUseCase,
};
use crate::modules::judgement::application::use_cases::list_judgements::{
    IListJudgementsUseCase, ListJudgementsError, ListJudgementsInput,
};
use crate::modules::judgement::application::use_cases::save_verification::{
    ISaveVerificationUseCase, SaveVerificationError, SaveVerificationInput,
};

// ==========================================================
// Session resolution
// ==========================================================

/// Stands in for the whole auth gate. `admin()`/`reviewer()` resolve any
/// bearer token to a fixed user of that role; `unauthenticated()` resolves
/// nothing.
pub struct StubResolveSessionUseCase {
    user: Option<SessionUser>,
}

impl StubResolveSessionUseCase {
    pub fn admin() -> Self {
        Self {
            user: Some(SessionUser {
                user_id: Uuid::new_v4(),
                full_name: "Ada Admin".to_string(),
                username: "ada.admin".to_string(),
                email: "ada@example.com".to_string(),
                role: UserRole::Admin,
            }),
        }
    }

    pub fn reviewer() -> Self {
        Self {
            user: Some(SessionUser {
                user_id: Uuid::new_v4(),
                full_name: "Rhea Reviewer".to_string(),
                username: "rhea.reviewer".to_string(),
                email: "rhea@example.com".to_string(),
                role: UserRole::User,
            }),
        }
    }

    pub fn unauthenticated() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IResolveSessionUseCase for StubResolveSessionUseCase {
    async fn execute(&self, _raw_token: &str) -> Result<SessionUser, ResolveSessionError> {
        match &self.user {
            Some(user) => Ok(user.clone()),
            None => Err(ResolveSessionError::SessionNotFound),
        }
    }
}

// ==========================================================
// Auth
// ==========================================================

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUserUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _raw_token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

// ==========================================================
// Admin
// ==========================================================

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _page: u64) -> Result<UserPage, ListUsersError> {
        Ok(UserPage {
            users: Vec::<UserRecord>::new(),
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<UserRecord, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _input: UpdateUserInput) -> Result<UserRecord, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _request: DeleteUserRequest) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetAssignmentCountsUseCase;

#[async_trait]
impl IGetAssignmentCountsUseCase for StubGetAssignmentCountsUseCase {
    async fn execute(&self) -> Result<Vec<UserAssignmentCounts>, GetAssignmentCountsError> {
        Ok(vec![])
    }
}

// ==========================================================
// Judgements
// ==========================================================

#[derive(Default, Clone)]
pub struct StubListJudgementsUseCase;

#[async_trait]
impl IListJudgementsUseCase for StubListJudgementsUseCase {
    async fn execute(
        &self,
        _input: ListJudgementsInput,
    ) -> Result<JudgementPage, ListJudgementsError> {
        Ok(JudgementPage {
            judgements: vec![],
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubFetchJudgementUseCase;

#[async_trait]
impl IFetchJudgementUseCase for StubFetchJudgementUseCase {
    async fn execute(
        &self,
        _judgement_id: Uuid,
        _caller_id: Uuid,
    ) -> Result<FetchJudgementOutput, FetchJudgementError> {
        Err(FetchJudgementError::JudgementNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubAssignJudgementUseCase;

#[async_trait]
impl IAssignJudgementUseCase for StubAssignJudgementUseCase {
    async fn execute(&self, _input: AssignJudgementInput) -> Result<(), AssignJudgementError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct StubSaveVerificationUseCase;

#[async_trait]
impl ISaveVerificationUseCase for StubSaveVerificationUseCase {
    async fn execute(
        &self,
        _input: SaveVerificationInput,
    ) -> Result<VerificationRecord, SaveVerificationError> {
        unimplemented!("Not used in this test")
    }
}
