use std::time::Duration;

use crate::errors::AppError;

/// Runtime configuration pulled from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub game_service_url: String,
    pub game_service_timeout: Duration,
}

impl Config {
    /// A missing GAME_SERVICE_URL is a hard startup error: without it the
    /// existence check could never run and every review would be accepted
    /// unvalidated.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::EnvError("DATABASE_URL must be set".into()))?;

        let game_service_url = std::env::var("GAME_SERVICE_URL")
            .map_err(|_| AppError::EnvError("GAME_SERVICE_URL must be set".into()))?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        let timeout_ms = std::env::var("GAME_SERVICE_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(5000);

        Ok(Self {
            port,
            database_url,
            game_service_url,
            game_service_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
