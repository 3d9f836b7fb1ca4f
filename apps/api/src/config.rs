use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            service_name: "guidance-api".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        None => Ok(Config::default().port),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{value}'")),
    }
}
