use std::sync::Arc;

use crate::service::ReviewService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReviewService>,
}
