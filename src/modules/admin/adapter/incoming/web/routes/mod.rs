mod assignment_counts;
mod create_user;
mod delete_user;
mod list_users;
mod update_user;

pub use assignment_counts::assignment_counts_handler;
pub use create_user::create_user_handler;
pub use delete_user::delete_user_handler;
pub use list_users::list_users_handler;
pub use update_user::update_user_handler;

pub use create_user::{CreateUserRequestDto, CreatedUserResponse};
pub use delete_user::DeleteUserResponse;
