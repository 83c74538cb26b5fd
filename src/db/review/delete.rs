use sqlx::PgPool;

use crate::errors::AppError;

/// Permanent removal. Returns whether a row was actually deleted so the
/// caller can report a missing id instead of a silent success.
pub async fn delete_review(id: i32, postgres: PgPool) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete review {id}: {}", e)))?;

    Ok(result.rows_affected() > 0)
}
