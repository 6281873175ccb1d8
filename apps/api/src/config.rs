use std::str::FromStr;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub llm_timeout_secs: u64,
    pub llm_max_attempts: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10)?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", 120)?,
            llm_max_attempts: env_or("LLM_MAX_ATTEMPTS", 3)?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses an optional variable, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let value: u16 = env_or("SCRIBE_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_env_or_parses_and_rejects() {
        std::env::set_var("SCRIBE_TEST_TIMEOUT", " 45 ");
        let value: u64 = env_or("SCRIBE_TEST_TIMEOUT", 120).unwrap();
        assert_eq!(value, 45);

        std::env::set_var("SCRIBE_TEST_BAD_PORT", "eighty");
        let err = env_or::<u16>("SCRIBE_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("SCRIBE_TEST_BAD_PORT"));
    }

    #[test]
    fn test_require_env_names_missing_key() {
        let err = require_env("SCRIBE_TEST_MISSING_KEY").unwrap_err();
        assert!(err.to_string().contains("SCRIBE_TEST_MISSING_KEY"));
    }
}
