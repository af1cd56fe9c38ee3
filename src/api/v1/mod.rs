//! v1 API endpoints

pub mod form;
pub mod predict;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/form", get(form::get_form))
        .route("/predict", post(predict::predict))
}
