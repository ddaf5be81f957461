/// Errors produced while validating the `Authorization` header.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,
    #[error("Authorization header is not a Bearer token")]
    NotBearer,
    #[error("invalid bearer token")]
    InvalidToken,
}

/// Validates a raw `Authorization` header value against the expected token.
///
/// The expected token is resolved once at startup and passed in; this
/// function never reads the environment so request handling stays
/// deterministic.
pub fn validate_bearer(header: Option<&str>, expected: &str) -> Result<(), AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let token = header.strip_prefix("Bearer ").ok_or(AuthError::NotBearer)?;

    if token == expected {
        Ok(())
    } else {
        Err(AuthError::InvalidToken)
    }
}
