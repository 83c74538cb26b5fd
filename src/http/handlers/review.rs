use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{GameAverage, GameStats, Review},
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    pub game_id: Option<i32>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub message: String,
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub count: usize,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReviewsResponse {
    pub game_id: i32,
    pub count: usize,
    pub average_rating: f64,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct DeleteReviewResponse {
    pub message: String,
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<(StatusCode, Json<CreateReviewResponse>), (StatusCode, String)> {
    let review = state
        .service
        .create_review(payload.game_id, payload.rating, payload.comment)
        .await
        .map_err(|e| {
            tracing::error!("Error creating review: {}", e);
            e.to_response()
        })?;

    tracing::info!("Success creating review {}", review.id);
    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponse {
            message: "Review created successfully".into(),
            review,
        }),
    ))
}

pub async fn get_all_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<ReviewListResponse>, (StatusCode, String)> {
    let reviews = state.service.list_all().await.map_err(|e| {
        tracing::error!("Error retrieving all reviews: {}", e);
        e.to_response()
    })?;

    Ok(Json(ReviewListResponse {
        count: reviews.len(),
        reviews,
    }))
}

pub async fn get_game_reviews_handler(
    Path(game_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<GameReviewsResponse>, (StatusCode, String)> {
    let (reviews, average_rating) = state.service.list_for_game(game_id).await.map_err(|e| {
        tracing::error!("Error retrieving reviews for game {}: {}", game_id, e);
        e.to_response()
    })?;

    Ok(Json(GameReviewsResponse {
        game_id,
        count: reviews.len(),
        average_rating,
        reviews,
    }))
}

pub async fn get_game_stats_handler(
    Path(game_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<GameStats>, (StatusCode, String)> {
    let stats = state.service.game_stats(game_id).await.map_err(|e| {
        tracing::error!("Error retrieving stats for game {}: {}", game_id, e);
        e.to_response()
    })?;

    Ok(Json(stats))
}

pub async fn get_game_average_handler(
    Path(game_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<GameAverage>, (StatusCode, String)> {
    let average = state.service.game_average(game_id).await.map_err(|e| {
        tracing::error!("Error retrieving average for game {}: {}", game_id, e);
        e.to_response()
    })?;

    Ok(Json(average))
}

pub async fn get_review_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let review = state.service.get_review(id).await.map_err(|e| {
        tracing::error!("Error retrieving review {}: {}", id, e);
        e.to_response()
    })?;

    Ok(Json(review))
}

pub async fn delete_review_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<DeleteReviewResponse>, (StatusCode, String)> {
    state.service.delete_review(id).await.map_err(|e| {
        tracing::error!("Error deleting review {}: {}", id, e);
        e.to_response()
    })?;

    tracing::info!("Success deleting review {id}");
    Ok(Json(DeleteReviewResponse {
        message: "Review deleted successfully".into(),
    }))
}
