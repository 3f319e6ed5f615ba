pub mod account_query;
pub mod password_hasher;
pub mod session_query;
pub mod session_repository;
pub mod user_query;

pub use account_query::{AccountQuery, AccountQueryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use session_query::{SessionQuery, SessionQueryError, SessionView};
pub use session_repository::{SessionRepository, SessionRepositoryError};
pub use user_query::{UserAuthView, UserQuery, UserQueryError};
