use axum::{
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc};
use tower_http::cors::CorsLayer;

pub type IpRateLimiter = Arc<RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>>;

pub fn create_global_rate_limiter() -> IpRateLimiter {
    // Allow 1000 requests per minute per IP (generous for normal usage)
    let quota = Quota::per_minute(NonZeroU32::new(1000).unwrap());
    Arc::new(RateLimiter::keyed(quota))
}

// IP-based rate limiting middleware function
pub async fn rate_limit_middleware(
    rate_limiter: IpRateLimiter,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let client_ip =
        if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
            addr.ip().to_string()
        } else {
            "unknown".to_string()
        };

    match rate_limiter.check_key(&client_ip) {
        Ok(_) => {
            let response = next.run(request).await;
            Ok(response)
        }
        Err(_) => {
            tracing::warn!("Rate limit exceeded for IP: {}", client_ip);
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}

// CORS configuration using multiple allowed origins from env
pub fn cors_layer() -> CorsLayer {
    let allowed_origins = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173".to_string())
        .split(',')
        .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
        .collect::<Vec<_>>();

    tracing::info!("CORS allowed origins: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
