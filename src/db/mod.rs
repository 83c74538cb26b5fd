pub mod review;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{NewReview, Review},
    service::ReviewStore,
};

/// Postgres-backed record store handed to the review service at
/// construction.
#[derive(Clone)]
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn insert(&self, new_review: NewReview) -> Result<Review, AppError> {
        review::insert_review(new_review, self.pool.clone()).await
    }

    async fn get(&self, id: i32) -> Result<Option<Review>, AppError> {
        review::get_review_by_id(id, self.pool.clone()).await
    }

    async fn all(&self) -> Result<Vec<Review>, AppError> {
        review::get_all_reviews(self.pool.clone()).await
    }

    async fn by_game(&self, game_id: i32) -> Result<Vec<Review>, AppError> {
        review::get_reviews_by_game_id(game_id, self.pool.clone()).await
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        review::delete_review(id, self.pool.clone()).await
    }
}
