pub mod accounts;
pub mod sessions;
pub mod users;
