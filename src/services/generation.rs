use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::{
    models::{
        CandidateOutfit, GarmentSlot, GenerateOutfitsRequest, GenerationContext, PriceBreakdown,
        Product, VisualFeatures,
    },
    services::{
        diversity, preferences,
        providers::{CatalogProvider, FeedbackStore},
        scoring,
        selection::{self, Strategy},
    },
};

/// Catalog read cap per generation request
const PRODUCT_POOL_LIMIT: u32 = 100;

/// Generates a ranked, diversity-filtered set of candidate outfits
///
/// Performs the two inbound reads (catalog pool, feedback history), derives
/// the preference model, then runs `count` independent explore/exploit
/// attempts before the diversity filter picks the final set. Store failures
/// degrade instead of propagating: a failed pool read yields no
/// recommendations, a failed history read falls back to the cold-start
/// model.
pub async fn generate_outfits<R: Rng>(
    catalog: Arc<dyn CatalogProvider>,
    feedback: Arc<dyn FeedbackStore>,
    request: GenerateOutfitsRequest,
    rng: &mut R,
) -> Vec<CandidateOutfit> {
    let pool = match catalog.get_active_products(PRODUCT_POOL_LIMIT).await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(error = %e, "Product pool read failed, generating from empty pool");
            Vec::new()
        }
    };

    let history = match feedback.get_feedback_history(&request.session_id).await {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!(error = %e, "Feedback history read failed, using cold-start preferences");
            Vec::new()
        }
    };

    let swipe_count = history.len();
    let context = GenerationContext {
        session_id: request.session_id,
        swipe_count,
        exploration_rate: preferences::exploration_rate(swipe_count),
        user_profile: request.user_profile,
        preferences: preferences::build_preference_model(&history),
        visual_embedding: request.visual_embedding,
        season: request.season,
    };

    tracing::info!(
        session_id = %context.session_id,
        pool_size = pool.len(),
        swipe_count,
        exploration_rate = context.exploration_rate,
        "Generating outfits"
    );

    let mut candidates = Vec::new();
    for _ in 0..request.count {
        let strategy = Strategy::draw(context.exploration_rate, rng);
        if let Some(outfit) = assemble_outfit(&pool, &context, strategy, rng) {
            candidates.push(outfit);
        }
    }

    if candidates.is_empty() {
        tracing::warn!(
            session_id = %context.session_id,
            "No complete outfits could be assembled"
        );
        return Vec::new();
    }

    let selected = diversity::select_diverse(candidates, request.count);

    tracing::info!(
        session_id = %context.session_id,
        returned = selected.len(),
        "Outfit generation completed"
    );

    selected
}

/// Assembles and scores one outfit
///
/// Returns None when any required slot has no candidates at all; partial
/// outfits are never produced.
fn assemble_outfit<R: Rng + ?Sized>(
    pool: &[Product],
    context: &GenerationContext,
    strategy: Strategy,
    rng: &mut R,
) -> Option<CandidateOutfit> {
    let mut products = Vec::with_capacity(GarmentSlot::REQUIRED.len());
    for slot in GarmentSlot::REQUIRED {
        match selection::select_for_slot(pool, slot, &context.preferences, strategy, rng) {
            Some(product) => products.push(product.clone()),
            None => {
                tracing::debug!(slot = %slot, "No candidates for required slot, skipping attempt");
                return None;
            }
        }
    }

    let total_price: f64 = products.iter().map(|p| p.price).sum();
    let colors = dominant_colors(&products);
    let styles = style_tags(&products);

    let score = scoring::score_outfit(&products, &colors, total_price, context);
    let formality = scoring::formality_score(&products);
    let explanation = build_explanation(&score, context);

    let price_breakdown = PriceBreakdown {
        total: total_price,
        tier: scoring::price_tier(total_price),
        value_score: scoring::value_score(&products, total_price),
    };
    let visual_features = VisualFeatures {
        dominant_colors: colors.into_iter().take(3).collect(),
        style_tags: styles,
        formality_score: formality,
        pattern_complexity: scoring::pattern_complexity(&products),
        occasion: scoring::occasion_label(formality).to_string(),
    };

    let insight = build_insight(score.overall, price_breakdown.value_score, strategy);

    Some(CandidateOutfit {
        id: Uuid::new_v4(),
        products,
        score,
        explanation,
        price_breakdown,
        visual_features,
        insight: Some(insight),
        badges: Vec::new(),
    })
}

/// Unique outfit colors in product order
fn dominant_colors(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for product in products {
        for color in &product.colors {
            if seen.insert(color.clone()) {
                colors.push(color.clone());
            }
        }
    }
    colors
}

/// Unique style tags in product order
fn style_tags(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut styles = Vec::new();
    for product in products {
        if let Some(style) = &product.style {
            if seen.insert(style.clone()) {
                styles.push(style.clone());
            }
        }
    }
    styles
}

/// Template-filled explanation from the sub-scores that cleared their
/// thresholds
fn build_explanation(score: &crate::models::OutfitScore, context: &GenerationContext) -> String {
    let mut parts: Vec<String> = Vec::new();

    if score.style_match > 0.8 {
        parts.push(format!(
            "A strong match for your {} style",
            context.user_profile.archetype
        ));
    }
    if score.color_harmony > 0.85 {
        parts.push("The colors harmonize beautifully".to_string());
    }
    if score.price_optimization > 0.8 {
        parts.push("Excellent value for the price".to_string());
    }

    if parts.is_empty() {
        return "A balanced combination put together from your profile.".to_string();
    }

    format!("{}.", parts.join(". "))
}

/// Short strategy-aware tip attached to each outfit
fn build_insight(overall: f64, value_score: f64, strategy: Strategy) -> String {
    match strategy {
        Strategy::Exploratory => {
            "This is a new direction for you. Let us know what you think!".to_string()
        }
        Strategy::Optimized => {
            if overall > 0.9 {
                "Top match! This fits your preferences perfectly.".to_string()
            } else if value_score > 0.9 {
                "Great deal: premium quality at this price point.".to_string()
            } else {
                "A solid choice based on your swipes.".to_string()
            }
        }
    }
}
