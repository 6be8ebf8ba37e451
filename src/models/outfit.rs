use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

/// The five sub-scores plus their weighted combination
///
/// Every value lies in [0, 1] and is rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitScore {
    pub style_match: f64,
    pub color_harmony: f64,
    pub price_optimization: f64,
    pub occasion_fit: f64,
    pub novelty: f64,
    pub overall: f64,
}

/// Coarse price bucket derived from an outfit's total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Budget,
    Mid,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub total: f64,
    pub tier: PriceTier,
    /// Quality-for-price proxy in [0, 1]
    pub value_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternComplexity {
    Minimal,
    Moderate,
    Detailed,
}

/// Display-oriented features extracted from the assembled products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualFeatures {
    /// Unique outfit colors in product order, at most 3
    pub dominant_colors: Vec<String>,
    pub style_tags: Vec<String>,
    /// 1-10 dressiness estimate
    pub formality_score: u8,
    pub pattern_complexity: PatternComplexity,
    /// Occasion label derived from the formality score
    pub occasion: String,
}

/// One generated outfit candidate
///
/// Created fresh per generation attempt and never mutated afterwards;
/// diversity filtering selects a subset, it does not alter scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateOutfit {
    pub id: Uuid,
    /// Exactly one product per required garment slot
    pub products: Vec<Product>,
    pub score: OutfitScore,
    pub explanation: String,
    pub price_breakdown: PriceBreakdown,
    pub visual_features: VisualFeatures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}
