use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        create_review_handler, delete_review_handler, get_all_reviews_handler,
        get_game_average_handler, get_game_reviews_handler, get_game_stats_handler,
        get_review_handler, health_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/reviews",
            post(create_review_handler).get(get_all_reviews_handler),
        )
        .route("/reviews/game/{game_id}", get(get_game_reviews_handler))
        .route(
            "/reviews/game/{game_id}/stats",
            get(get_game_stats_handler),
        )
        .route(
            "/reviews/game/{game_id}/average",
            get(get_game_average_handler),
        )
        .route(
            "/reviews/{id}",
            get(get_review_handler).delete(delete_review_handler),
        )
        .with_state(state)
}

/// Unknown routes report a real 404, not a 200 with a 404-looking body.
pub async fn fallback_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_unknown_route_fallback_status_is_404() {
        let response = fallback_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
