use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// Extracts the verified claim set from request extensions.
///
/// Intended for routes behind `AuthMiddleware`, which validates the token and
/// inserts the decoded `Claims`. Taking this as a handler parameter makes the
/// authorization requirement explicit in the signature instead of relying on
/// ambient state.
///
/// If no claims are present (middleware not applied, or not run), extraction
/// fails with `AppError::Unauthorized`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().cloned() {
            Some(claims) => ready(Ok(AuthenticatedUser(claims))),
            None => {
                let err = AppError::Unauthorized("No verified claims on request".to_string());
                ready(Err(err.into()))
            }
        }
    }
}
