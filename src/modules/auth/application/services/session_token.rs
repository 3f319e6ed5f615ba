use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of the raw session token in bytes before hex encoding.
const TOKEN_BYTES: usize = 32;

/// Generate an opaque session token. The raw value goes back to the client;
/// only its hash (see [`hash_session_token`]) is persisted.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    to_hex(&bytes)
}

/// SHA-256 of the raw token, hex encoded. Deterministic, so the lookup on
/// every authenticated request is a single indexed equality match.
pub fn hash_session_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    to_hex(&hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique_and_sized() {
        let a = generate_session_token();
        let b = generate_session_token();

        assert_eq!(a.len(), TOKEN_BYTES * 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let token = generate_session_token();
        assert_eq!(hash_session_token(&token), hash_session_token(&token));
    }

    #[test]
    fn test_hash_differs_from_token() {
        let token = generate_session_token();
        let hash = hash_session_token(&token);

        assert_ne!(hash, token);
        assert_eq!(hash.len(), 64); // SHA-256 hex
    }
}
