use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::errors::AppError;

/// Outcome of asking the game catalog whether a game id is known. An
/// unreachable catalog must never be collapsed into `NotFound`, otherwise
/// valid reviews would be permanently rejected during an outage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLookup {
    Found,
    NotFound,
    Unavailable,
}

#[async_trait]
pub trait GameExistence: Send + Sync {
    async fn lookup(&self, game_id: i32) -> GameLookup;
}

/// Client for the external game catalog's lookup-by-id endpoint.
pub struct GameCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl GameCatalog {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build game service client: {e}");
                AppError::InternalError
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GameExistence for GameCatalog {
    async fn lookup(&self, game_id: i32) -> GameLookup {
        let url = format!("{}/games/{}", self.base_url, game_id);

        match self.client.get(&url).send().await {
            Ok(res) => {
                let outcome = classify_status(res.status());
                tracing::debug!("Game service returned {} for game {game_id}", res.status());
                outcome
            }
            Err(e) => {
                tracing::warn!("Game service did not respond for game {game_id}: {e}");
                GameLookup::Unavailable
            }
        }
    }
}

/// Success means the game exists, a client error means the catalog confirmed
/// it does not, anything else means we could not get a confirmation.
pub fn classify_status(status: StatusCode) -> GameLookup {
    if status.is_success() {
        GameLookup::Found
    } else if status.is_client_error() {
        GameLookup::NotFound
    } else {
        GameLookup::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_is_found() {
        assert_eq!(classify_status(StatusCode::OK), GameLookup::Found);
        assert_eq!(classify_status(StatusCode::NO_CONTENT), GameLookup::Found);
    }

    #[test]
    fn test_client_error_is_not_found() {
        assert_eq!(classify_status(StatusCode::NOT_FOUND), GameLookup::NotFound);
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST),
            GameLookup::NotFound
        );
    }

    #[test]
    fn test_server_error_is_unavailable() {
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            GameLookup::Unavailable
        );
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY),
            GameLookup::Unavailable
        );
    }
}
