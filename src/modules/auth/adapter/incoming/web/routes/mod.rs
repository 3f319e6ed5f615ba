mod current_session;
mod login_user;
mod logout_user;

pub use current_session::current_session_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;

pub use login_user::{LoginRequestDto, LoginResponse, LoginUserInfo};
