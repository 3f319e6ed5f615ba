use async_trait::async_trait;
use std::fmt;

/// Hashing is CPU-bound and parameterized per environment, so it sits behind
/// a port and runs off the async executor.
#[async_trait]
pub trait PasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

#[derive(Debug, PartialEq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::HashFailed => write!(f, "Failed to hash password"),
            HashError::VerifyFailed => write!(f, "Failed to verify password"),
            HashError::TaskFailed => write!(f, "Hashing task failed"),
        }
    }
}
