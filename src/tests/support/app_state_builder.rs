use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::application::use_cases::create_user::ICreateUserUseCase;
use crate::modules::admin::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::modules::admin::application::use_cases::get_assignment_counts::IGetAssignmentCountsUseCase;
use crate::modules::admin::application::use_cases::list_users::IListUsersUseCase;
use crate::modules::admin::application::use_cases::update_user::IUpdateUserUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::logout_user::ILogoutUserUseCase;
use crate::modules::auth::application::use_cases::resolve_session::IResolveSessionUseCase;
use crate::modules::judgement::application::use_cases::assign_judgement::IAssignJudgementUseCase;
use crate::modules::judgement::application::use_cases::fetch_judgement::IFetchJudgementUseCase;
use crate::modules::judgement::application::use_cases::list_judgements::IListJudgementsUseCase;
use crate::modules::judgement::application::use_cases::save_verification::ISaveVerificationUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Assembles an AppState where everything is a stub unless a test swaps in
/// its own mock. Routes under test only ever touch the use case they mock
/// plus, for protected routes, the session stub.
pub struct TestAppStateBuilder {
    resolve_session: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUserUseCase + Send + Sync>,
    list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    get_assignment_counts: Arc<dyn IGetAssignmentCountsUseCase + Send + Sync>,
    list_judgements: Arc<dyn IListJudgementsUseCase + Send + Sync>,
    fetch_judgement: Arc<dyn IFetchJudgementUseCase + Send + Sync>,
    assign_judgement: Arc<dyn IAssignJudgementUseCase + Send + Sync>,
    save_verification: Arc<dyn ISaveVerificationUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            resolve_session: Arc::new(StubResolveSessionUseCase::unauthenticated()),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            create_user: Arc::new(StubCreateUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            get_assignment_counts: Arc::new(StubGetAssignmentCountsUseCase),
            list_judgements: Arc::new(StubListJudgementsUseCase),
            fetch_judgement: Arc::new(StubFetchJudgementUseCase),
            assign_judgement: Arc::new(StubAssignJudgementUseCase),
            save_verification: Arc::new(StubSaveVerificationUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_resolve_session(
        mut self,
        uc: impl IResolveSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_session = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(
        mut self,
        uc: impl ILogoutUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_create_user(
        mut self,
        uc: impl ICreateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(
        mut self,
        uc: impl IUpdateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_delete_user(
        mut self,
        uc: impl IDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_get_assignment_counts(
        mut self,
        uc: impl IGetAssignmentCountsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_assignment_counts = Arc::new(uc);
        self
    }

    pub fn with_list_judgements(
        mut self,
        uc: impl IListJudgementsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_judgements = Arc::new(uc);
        self
    }

    pub fn with_fetch_judgement(
        mut self,
        uc: impl IFetchJudgementUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_judgement = Arc::new(uc);
        self
    }

    pub fn with_assign_judgement(
        mut self,
        uc: impl IAssignJudgementUseCase + Send + Sync + 'static,
    ) -> Self {
        self.assign_judgement = Arc::new(uc);
        self
    }

    pub fn with_save_verification(
        mut self,
        uc: impl ISaveVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_verification = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            resolve_session_use_case: self.resolve_session,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            list_users_use_case: self.list_users,
            create_user_use_case: self.create_user,
            update_user_use_case: self.update_user,
            delete_user_use_case: self.delete_user,
            get_assignment_counts_use_case: self.get_assignment_counts,
            list_judgements_use_case: self.list_judgements,
            fetch_judgement_use_case: self.fetch_judgement,
            assign_judgement_use_case: self.assign_judgement,
            save_verification_use_case: self.save_verification,
        })
    }
}
