use std::env;

/// Authentication settings shared by the credential issuer and the gate.
///
/// There are intentionally no defaults here: a process started without a
/// signing secret or account credentials refuses to boot rather than running
/// with a guessable key baked in.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password: String,
}

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            auth: AuthConfig {
                jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
                admin_username: env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set"),
                admin_password: env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set"),
            },
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
