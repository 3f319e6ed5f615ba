pub mod assignment_count_query;
pub mod user_admin_query;
pub mod user_cascade;
pub mod user_repository;

pub use assignment_count_query::{
    AssignmentCountQuery, AssignmentCountQueryError, UserAssignmentCounts,
};
pub use user_admin_query::{UserAdminQuery, UserAdminQueryError, UserPage, UserRecord};
pub use user_cascade::{UserCascadeError, UserCascadeRepository};
pub use user_repository::{
    NewUser, UserProfileUpdate, UserRepository, UserRepositoryError,
};
