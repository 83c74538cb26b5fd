use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    catalog::{GameExistence, GameLookup},
    errors::AppError,
    models::{
        GameAverage, GameStats, NewReview, Review,
        review::{
            MAX_COMMENT_LENGTH, MAX_RATING, MIN_RATING, average_rating, rating_distribution,
            round_to_one_decimal,
        },
    },
};

/// Durable keyed storage for reviews. The Postgres adapter lives in
/// `crate::db`; tests plug in an in-memory double.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert(&self, new_review: NewReview) -> Result<Review, AppError>;
    async fn get(&self, id: i32) -> Result<Option<Review>, AppError>;
    async fn all(&self) -> Result<Vec<Review>, AppError>;
    async fn by_game(&self, game_id: i32) -> Result<Vec<Review>, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

/// Orchestrates validation, the remote existence check, persistence, and
/// rating aggregation. Both collaborators are injected so nothing here
/// touches a global handle.
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
    catalog: Arc<dyn GameExistence>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>, catalog: Arc<dyn GameExistence>) -> Self {
        Self { store, catalog }
    }

    /// Validates the payload, confirms the game exists in the external
    /// catalog, then persists. The existence check runs after local
    /// validation so malformed input never generates network traffic, and
    /// nothing is written unless the catalog confirms the game.
    pub async fn create_review(
        &self,
        game_id: Option<i32>,
        rating: Option<f64>,
        comment: Option<String>,
    ) -> Result<Review, AppError> {
        let (Some(game_id), Some(rating)) = (game_id, rating) else {
            return Err(AppError::Validation(
                "gameId and rating are required".into(),
            ));
        };

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::Validation(format!(
                "Rating must be a number between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        if let Some(comment) = &comment
            && comment.chars().count() > MAX_COMMENT_LENGTH
        {
            return Err(AppError::Validation(format!(
                "Comment must be at most {MAX_COMMENT_LENGTH} characters"
            )));
        }

        match self.catalog.lookup(game_id).await {
            GameLookup::Found => {
                tracing::info!("Game {game_id} validated against the game service");
            }
            GameLookup::NotFound => return Err(AppError::InvalidGame(game_id)),
            GameLookup::Unavailable => return Err(AppError::GameServiceUnavailable),
        }

        let new_review = NewReview {
            game_id,
            rating: round_to_one_decimal(rating),
            comment,
        };

        self.store.insert(new_review).await
    }

    /// Every review, most recent first.
    pub async fn list_all(&self) -> Result<Vec<Review>, AppError> {
        self.store.all().await
    }

    /// Reviews for one game, most recent first, plus their rounded average.
    /// No catalog call happens on the read path; an unknown game simply has
    /// zero reviews.
    pub async fn list_for_game(&self, game_id: i32) -> Result<(Vec<Review>, f64), AppError> {
        let reviews = self.store.by_game(game_id).await?;
        let average = average_rating(&reviews);
        Ok((reviews, average))
    }

    pub async fn game_stats(&self, game_id: i32) -> Result<GameStats, AppError> {
        let reviews = self.store.by_game(game_id).await?;

        Ok(GameStats {
            game_id,
            total_reviews: reviews.len(),
            average_rating: average_rating(&reviews),
            distribution: rating_distribution(&reviews),
        })
    }

    /// Reduced form of the stats call, pulled by the game service for its
    /// own summary display.
    pub async fn game_average(&self, game_id: i32) -> Result<GameAverage, AppError> {
        let reviews = self.store.by_game(game_id).await?;

        Ok(GameAverage {
            game_id,
            average_rating: average_rating(&reviews),
            total_reviews: reviews.len(),
        })
    }

    pub async fn get_review(&self, id: i32) -> Result<Review, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {id} not found")))
    }

    pub async fn delete_review(&self, id: i32) -> Result<(), AppError> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Review {id} not found")))
        }
    }
}
