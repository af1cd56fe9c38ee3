//! Form schema endpoint handler

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{FormSchemaResponse, Json};

/// GET /v1/form
pub async fn get_form(State(state): State<AppState>) -> Json<FormSchemaResponse> {
    let predictor = &state.predictor;

    Json(FormSchemaResponse::for_revision(
        predictor.revision(),
        predictor.artifacts().feature_order(),
    ))
}
