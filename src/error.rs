//!
//! # Error Handling
//!
//! Defines the application-wide error type `AppError` and its mapping onto
//! HTTP responses. The taxonomy is deliberately small: credential rejection,
//! gate rejection, malformed identifiers, missing records, and store failures.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers (and
//! the auth middleware) can return it with `?` and Actix renders the right
//! status code and JSON body. `From` impls cover `sqlx::Error` and
//! `jsonwebtoken::errors::Error`.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;

/// All error conditions the request path can produce.
///
/// The string payloads are internal detail for logs; the client-facing bodies
/// for the two 401 variants are fixed so that no validation step leaks which
/// check failed.
#[derive(Debug)]
pub enum AppError {
    /// Login attempt with a username/password pair that does not match the
    /// configured account (HTTP 401). Wrong username and wrong password are
    /// indistinguishable.
    InvalidCredentials,
    /// Missing, malformed, tampered, or expired bearer token (HTTP 401).
    /// Every gate failure produces the same response body.
    Unauthorized(String),
    /// A path identifier segment that does not parse as an identifier
    /// (HTTP 400). Distinct from `NotFound`.
    InvalidIdentifier(String),
    /// A well-formed identifier with no matching record (HTTP 404).
    NotFound(String),
    /// Store connectivity or query failure (HTTP 500). Logged, never fatal
    /// to the process; other in-flight requests are unaffected.
    StoreUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidCredentials => HttpResponse::Unauthorized().json(json!({
                "error": "invalid credentials"
            })),
            // Fixed body regardless of which validation step rejected the
            // token; the reason stays in logs.
            AppError::Unauthorized(msg) => {
                log::debug!("rejected request: {}", msg);
                HttpResponse::Unauthorized().json(json!({
                    "error": "unauthorized"
                }))
            }
            AppError::InvalidIdentifier(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::StoreUnavailable(msg) => {
                log::error!("store error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "store unavailable"
                }))
            }
        }
    }
}

/// `RowNotFound` maps to `NotFound`; everything else is a store failure.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::StoreUnavailable(error.to_string()),
        }
    }
}

/// Any JWT processing failure is an authorization failure.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}
