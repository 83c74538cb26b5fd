pub mod review;

pub use review::{GameAverage, GameStats, NewReview, Review};
