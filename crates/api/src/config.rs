/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
}

/// Origins of the web front end during local development.
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,https://localhost:3000";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                        |
    /// |------------------------|------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                      |
    /// | `PORT`                 | `5000`                                         |
    /// | `CORS_ORIGINS`         | `http://localhost:3000,https://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                           |
    /// | `DB_MAX_CONNECTIONS`   | `20`                                           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(recipe_db::DEFAULT_MAX_CONNECTIONS);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
