pub mod health;
pub mod review;

pub use health::health_handler;
pub use review::{
    create_review_handler, delete_review_handler, get_all_reviews_handler,
    get_game_average_handler, get_game_reviews_handler, get_game_stats_handler,
    get_review_handler,
};
