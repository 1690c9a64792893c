pub mod auth;
pub mod health;
pub mod todos;

use actix_web::dev::HttpServiceFactory;
use actix_web::web;

use crate::auth::AuthMiddleware;
use crate::config::AuthConfig;

/// Everything under the versioned prefix: the public login route plus the
/// todo routes, with the authorization gate wrapped around the todo scope
/// only.
pub fn api_scope(auth: &AuthConfig) -> impl HttpServiceFactory {
    web::scope("/v1").service(auth::login).service(
        web::scope("/todos")
            .wrap(AuthMiddleware::new(auth.jwt_secret.clone()))
            .service(todos::list_todos)
            .service(todos::create_todo)
            .service(todos::get_todo)
            .service(todos::update_todo)
            .service(todos::delete_todo),
    )
}
