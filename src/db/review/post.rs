use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{
        NewReview, Review,
        review::{MAX_COMMENT_LENGTH, MAX_RATING, MIN_RATING},
    },
};

pub async fn insert_review(new_review: NewReview, postgres: PgPool) -> Result<Review, AppError> {
    // Re-checked here so no code path can slip an invalid row past the
    // service layer; the migration carries matching CHECK constraints.
    if !(MIN_RATING..=MAX_RATING).contains(&new_review.rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    if let Some(comment) = &new_review.comment
        && comment.chars().count() > MAX_COMMENT_LENGTH
    {
        return Err(AppError::Validation(format!(
            "Comment must be at most {MAX_COMMENT_LENGTH} characters"
        )));
    }

    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (game_id, rating, comment)
			VALUES ($1, $2, $3)
			RETURNING id, game_id, rating, comment, created_at, updated_at",
    )
    .bind(new_review.game_id)
    .bind(new_review.rating)
    .bind(new_review.comment)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert review: {}", e)))?;

    Ok(review)
}
