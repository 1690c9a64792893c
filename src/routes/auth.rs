use crate::{
    auth::{authenticate, AuthResponse, LoginRequest},
    config::AuthConfig,
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Login
///
/// Checks the submitted credential pair against the configured account and
/// returns a signed 24-hour bearer token. The only public route besides the
/// health check; any mismatch is a 401 with no hint of which field was wrong.
#[post("/login")]
pub async fn login(
    config: web::Data<AuthConfig>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let token = authenticate(&login_data, &config)?;

    Ok(HttpResponse::Ok().json(AuthResponse { token }))
}
