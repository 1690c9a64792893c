use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;

use todovault::config::Config;
use todovault::repository::{PgTodoRepository, TodoRepository};
use todovault::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Failing fast here is fine; once the server is up, store errors are
    // per-request 500s, never process exits.
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    log::info!("Connected to Postgres");

    let repo: Arc<dyn TodoRepository> = Arc::new(PgTodoRepository::new(pool));
    let repo_data = web::Data::from(repo);
    let auth_config = config.auth.clone();

    log::info!("Starting todovault server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(repo_data.clone())
            .app_data(web::Data::new(auth_config.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(routes::api_scope(&auth_config))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
