pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/test", post(health::test_handler))
        // Path casing preserved from the public API contract.
        .route("/Analyse", post(handlers::handle_analyse))
        .with_state(state)
}
