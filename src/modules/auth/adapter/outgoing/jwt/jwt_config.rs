#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Only tokens carrying this `iss` are accepted.
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be at least 32 characters long for HS256 algorithm")]
    SecretTooShort,
}

impl JwtConfig {
    pub fn new(secret_key: String, issuer: String) -> Result<Self, JwtConfigError> {
        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }

        Ok(Self { secret_key, issuer })
    }
}
