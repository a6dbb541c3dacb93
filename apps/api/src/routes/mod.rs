pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::formatting::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/formats", get(handlers::handle_list_formats))
        .route("/api/v1/format", post(handlers::handle_format))
        .route("/api/v1/generate", post(handlers::handle_generate))
        .with_state(state)
}
