use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub environment: String,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: "game-reviews-be",
        timestamp: Utc::now().to_rfc3339(),
        environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
    })
}
