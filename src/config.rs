//! Environment-backed application configuration.

/// Application configuration loaded from the process environment.
pub struct Config {
    /// Connection string for the registry database.
    pub database_url: String,
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; `LISTEN_ADDR` defaults to `0.0.0.0:8080`.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}
