pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod service;
mod state;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, middleware as axum_middleware};
use sqlx::postgres::PgPoolOptions;

use crate::{
    catalog::GameCatalog,
    config::Config,
    db::PgReviewStore,
    middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware},
    service::ReviewService,
    state::AppState,
};

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("Failed to run migrations: {e}");
        panic!("Failed to run migrations: {e}");
    }

    let catalog = GameCatalog::new(
        config.game_service_url.clone(),
        config.game_service_timeout,
    )
    .expect("Failed to build game service client");

    let service = ReviewService::new(Arc::new(PgReviewStore::new(pool)), Arc::new(catalog));
    let state = AppState {
        service: Arc::new(service),
    };

    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .fallback(http::routes::fallback_handler);

    tracing::info!("Review service running on port {}", config.port);
    tracing::info!("Game service URL: {}", config.game_service_url);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
