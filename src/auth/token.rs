use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token.
const TOKEN_TTL_HOURS: i64 = 24;

/// The claim set carried by an issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Account name the token was issued to.
    pub username: String,
    /// Account role; only "admin" exists.
    pub role: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Signs a token for `username` expiring 24 hours from now.
///
/// The signing secret is injected by the caller; there is no ambient or
/// default key.
pub fn generate_token(username: &str, role: &str, secret: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        username: username.to_string(),
        role: role.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Unauthorized(format!("Failed to sign token: {}", e)))
}

/// Verifies a token string and decodes its claims.
///
/// Signature and expiry are checked with the default HS256 validation. A
/// malformed, tampered, or expired token comes back as `AppError::Unauthorized`;
/// callers render all of those identically.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}
