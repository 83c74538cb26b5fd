pub mod delete;
pub mod get;
pub mod post;

pub use delete::delete_review;
pub use get::{get_all_reviews, get_review_by_id, get_reviews_by_game_id};
pub use post::insert_review;
