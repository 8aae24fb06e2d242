//! Per-session CSRF token carried by every form as a hidden `csrf_token` field.

use api::FieldErrors;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tower_sessions::Session;

const CSRF_KEY: &str = "csrf_token";
const TOKEN_LEN: usize = 32;

pub const FIELD: &str = "csrf_token";
pub const REJECTED: &str = "The CSRF token is missing or invalid.";

/// The session's token, minting one on first use.
pub async fn token(session: &Session) -> api::Result<String> {
    if let Some(token) = session.get::<String>(CSRF_KEY).await? {
        return Ok(token);
    }
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect();
    session.insert(CSRF_KEY, &token).await?;
    Ok(token)
}

/// Whether `submitted` matches the session's token.
pub async fn verify(session: &Session, submitted: &str) -> api::Result<bool> {
    let Some(expected) = session.get::<String>(CSRF_KEY).await? else {
        return Ok(false);
    };
    Ok(!submitted.is_empty() && constant_time_eq(expected.as_bytes(), submitted.as_bytes()))
}

/// Field errors for a form whose token did not verify.
pub fn rejected() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.push(FIELD, REJECTED);
    errors
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
