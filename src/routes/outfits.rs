use std::sync::Arc;

use axum::{extract::State, Json};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    error::{AppError, AppResult},
    models::{CandidateOutfit, GenerateOutfitsRequest},
    routes::AppState,
    services::generation,
};

/// Maximum outfits per request
const MAX_COUNT: usize = 12;

/// Handler for outfit generation
///
/// An empty result is a valid response: it signals insufficient catalog
/// data, not a failure.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateOutfitsRequest>,
) -> AppResult<Json<Vec<CandidateOutfit>>> {
    if request.count == 0 || request.count > MAX_COUNT {
        return Err(AppError::InvalidInput(format!(
            "count must be between 1 and {}",
            MAX_COUNT
        )));
    }

    tracing::info!(
        session_id = %request.session_id,
        count = request.count,
        archetype = %request.user_profile.archetype,
        "Processing outfit generation request"
    );

    let mut rng = StdRng::from_entropy();
    let outfits = generation::generate_outfits(
        state.catalog.clone(),
        state.feedback.clone(),
        request,
        &mut rng,
    )
    .await;

    Ok(Json(outfits))
}
