use crate::models::{FeedbackEvent, PreferenceModel, PriceRange, SwipeDirection};

/// Probability that a generation attempt ignores learned preferences
///
/// Starts at 30% for a fresh session and tightens by 2% per recorded swipe
/// down to a 10% floor, so some novelty always survives.
pub fn exploration_rate(swipe_count: usize) -> f64 {
    (0.3 - 0.02 * swipe_count as f64).max(0.1)
}

/// Derives a preference model from a session's swipe history
///
/// Liked events contribute colors, styles, the price band, and the formality
/// preference; disliked events contribute only their colors and styles. The
/// history order does not matter. An empty history yields the cold-start
/// defaults.
pub fn build_preference_model(history: &[FeedbackEvent]) -> PreferenceModel {
    let mut model = PreferenceModel::default();

    let mut liked_prices: Vec<f64> = Vec::new();
    let mut liked_formality: Vec<f64> = Vec::new();

    for event in history {
        match event.direction {
            SwipeDirection::Liked => {
                model
                    .liked_colors
                    .extend(event.features.colors.iter().cloned());
                model
                    .liked_styles
                    .extend(event.features.styles.iter().cloned());
                if event.features.total_price > 0.0 {
                    liked_prices.push(event.features.total_price);
                }
                liked_formality.push(event.features.formality_score as f64);
            }
            SwipeDirection::Disliked => {
                model
                    .disliked_colors
                    .extend(event.features.colors.iter().cloned());
                model
                    .disliked_styles
                    .extend(event.features.styles.iter().cloned());
            }
            SwipeDirection::Neutral => {}
        }
    }

    if !liked_prices.is_empty() {
        let sum: f64 = liked_prices.iter().sum();
        model.price_range = Some(PriceRange {
            min: liked_prices.iter().copied().fold(f64::INFINITY, f64::min),
            max: liked_prices
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            preferred_avg: sum / liked_prices.len() as f64,
        });
    }

    if !liked_formality.is_empty() {
        model.formality_preference =
            liked_formality.iter().sum::<f64>() / liked_formality.len() as f64;
    }

    model
}
