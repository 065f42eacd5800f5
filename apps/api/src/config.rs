use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies (record batches, analyses).
    pub body_limit_bytes: usize,
    pub cors_permissive: bool,
}

const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            cors_permissive: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            body_limit_bytes: parse_env("BODY_LIMIT_BYTES", defaults.body_limit_bytes)
                .context("BODY_LIMIT_BYTES must be a positive integer")?,
            cors_permissive: parse_env("CORS_PERMISSIVE", defaults.cors_permissive)
                .context("CORS_PERMISSIVE must be true or false")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
