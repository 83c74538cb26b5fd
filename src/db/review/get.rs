use sqlx::PgPool;

use crate::{errors::AppError, models::Review};

pub async fn get_review_by_id(id: i32, postgres: PgPool) -> Result<Option<Review>, AppError> {
    let review = sqlx::query_as::<_, Review>(
        "SELECT id, game_id, rating, comment, created_at, updated_at
			FROM reviews
			WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch review {id}: {}", e)))?;

    Ok(review)
}

pub async fn get_all_reviews(postgres: PgPool) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, game_id, rating, comment, created_at, updated_at
			FROM reviews
			ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reviews: {}", e)))?;

    Ok(reviews)
}

pub async fn get_reviews_by_game_id(
    game_id: i32,
    postgres: PgPool,
) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, game_id, rating, comment, created_at, updated_at
			FROM reviews
			WHERE game_id = $1
			ORDER BY created_at DESC, id DESC",
    )
    .bind(game_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to fetch reviews for game {game_id}: {}", e))
    })?;

    Ok(reviews)
}
