pub mod extractors;
pub mod middleware;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::AppError;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use token::{generate_token, verify_token, Claims};

/// The only role the system knows.
pub const ADMIN_ROLE: &str = "admin";

/// Payload for a login request.
///
/// Both fields default to empty strings when absent, so a missing field is a
/// plain credential mismatch rather than a decode error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The signed bearer token.
    pub token: String,
}

/// Checks a credential pair against the configured account and mints a token.
///
/// Any mismatch, in either field or both, fails with `InvalidCredentials`;
/// the caller cannot tell which field was wrong.
pub fn authenticate(login: &LoginRequest, config: &AuthConfig) -> Result<String, AppError> {
    if login.username != config.admin_username || login.password != config.admin_password {
        return Err(AppError::InvalidCredentials);
    }

    generate_token(&login.username, ADMIN_ROLE, &config.jwt_secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
        }
    }

    #[test]
    fn test_authenticate_issues_admin_token() {
        let config = test_config();
        let login = LoginRequest {
            username: "admin".to_string(),
            password: "password".to_string(),
        };

        let token = authenticate(&login, &config).unwrap();
        let claims = verify_token(&token, &config.jwt_secret).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, ADMIN_ROLE);
    }

    #[test]
    fn test_authenticate_same_error_for_any_mismatch() {
        let config = test_config();
        let attempts = [
            ("admin", "wrong"),
            ("wrong", "password"),
            ("wrong", "wrong"),
            ("", ""),
            ("admin", ""),
            ("", "password"),
        ];

        for (username, password) in attempts {
            let login = LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            };
            match authenticate(&login, &config) {
                Err(AppError::InvalidCredentials) => {}
                other => panic!(
                    "expected InvalidCredentials for {:?}, got {:?}",
                    (username, password),
                    other
                ),
            }
        }
    }

    #[test]
    fn test_missing_fields_decode_as_mismatch() {
        let login: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(login.username, "");
        assert_eq!(login.password, "");
        assert!(matches!(
            authenticate(&login, &test_config()),
            Err(AppError::InvalidCredentials)
        ));
    }
}
