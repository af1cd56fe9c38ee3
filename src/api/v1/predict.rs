//! Prediction endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictRequest, PredictResponse};
use crate::infrastructure::observability::record_prediction;

/// POST /v1/predict
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!(
        budget = request.movie.budget,
        release_year = request.movie.release_year,
        include_features = request.include_features,
        "Predicting revenue"
    );

    let revision = state.predictor.revision();
    let prediction = match state.predictor.predict(&request.movie) {
        Ok(prediction) => prediction,
        Err(e) => {
            record_prediction(revision, None);
            return Err(ApiError::from(e));
        }
    };

    record_prediction(revision, Some(prediction.log_revenue));

    Ok(Json(PredictResponse::from_domain(
        &prediction,
        request.include_features,
    )))
}
