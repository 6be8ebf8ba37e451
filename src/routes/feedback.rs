use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    models::{FeedbackEvent, OutfitFeatures, SwipeDirection},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub session_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub outfit_id: Uuid,
    pub direction: SwipeDirection,
    pub outfit_features: OutfitFeatures,
}

/// Handler for swipe feedback
///
/// The write is dispatched to a background task: the response never waits on
/// the store, and a failed write is logged and dropped rather than surfaced.
pub async fn record(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FeedbackRequest>,
) -> StatusCode {
    tracing::debug!(
        session_id = %request.session_id,
        outfit_id = %request.outfit_id,
        direction = request.direction.as_str(),
        "Accepted feedback event"
    );

    let event = FeedbackEvent {
        session_id: request.session_id,
        user_id: request.user_id,
        outfit_id: request.outfit_id,
        direction: request.direction,
        features: request.outfit_features,
        created_at: Utc::now(),
    };

    let store = state.feedback.clone();
    tokio::spawn(async move {
        if let Err(e) = store.record_feedback(event).await {
            tracing::error!(error = %e, "Failed to record feedback event");
        }
    });

    StatusCode::ACCEPTED
}
