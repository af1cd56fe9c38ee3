//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::Predictor;

/// Application state; the predictor is immutable so handlers only ever read it
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor: Arc::new(predictor),
        }
    }
}
