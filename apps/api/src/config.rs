use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails fast at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Optional OpenAI key. Missing, blank, or the `.env.example` placeholder
    /// means the server runs in mock mode with the deterministic generators.
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:careerloom.db".to_string()),
            jwt_secret: require_env("JWT_SECRET")?,
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Decided once at startup: the mock/live split never re-checks per request.
    pub fn mock_mode(&self) -> bool {
        match self.openai_api_key.as_deref() {
            None => true,
            Some(key) => key.trim().is_empty() || key == "optional_key_here",
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
