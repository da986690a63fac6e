use anyhow::{Context, Result};

/// Application configuration loaded once from environment variables at startup
/// and treated as immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion-service credential. `None` when unset or blank: the server
    /// still starts, but every generation request is rejected with a visible
    /// configuration error until the key is provided.
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Config {
            openai_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
