use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

/// Price band derived from liked outfits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub preferred_avg: f64,
}

impl Default for PriceRange {
    /// Wide-open cold-start band used until the first liked outfit arrives
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1000.0,
            preferred_avg: 300.0,
        }
    }
}

/// Preferences derived from a session's swipe history
///
/// Recomputed from persisted history on every generation call; never mutated
/// in place, so concurrent requests can share it freely.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceModel {
    pub liked_colors: HashSet<String>,
    pub disliked_colors: HashSet<String>,
    pub liked_styles: HashSet<String>,
    pub disliked_styles: HashSet<String>,
    /// None until at least one liked outfit carries a price; consumers fall
    /// back to [`PriceRange::default`]
    pub price_range: Option<PriceRange>,
    /// Mean formality of liked outfits, 1-10
    pub formality_preference: f64,
}

impl Default for PreferenceModel {
    fn default() -> Self {
        Self {
            liked_colors: HashSet::new(),
            disliked_colors: HashSet::new(),
            liked_styles: HashSet::new(),
            disliked_styles: HashSet::new(),
            price_range: None,
            formality_preference: 5.0,
        }
    }
}

/// Coarse spending bucket for a profile without learned price data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    /// Maps a raw budget amount (as quiz flows submit it) to a tier
    pub fn from_amount(amount: f64) -> Self {
        if amount <= 200.0 {
            BudgetTier::Low
        } else if amount <= 400.0 {
            BudgetTier::Medium
        } else {
            BudgetTier::High
        }
    }
}

impl Default for BudgetTier {
    fn default() -> Self {
        BudgetTier::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Style profile supplied with a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_archetype")]
    pub archetype: String,
    #[serde(default)]
    pub preferred_colors: Vec<String>,
    /// Accepts either a tier name ("low") or a raw budget amount (350)
    #[serde(default, deserialize_with = "budget_tier_or_amount")]
    pub budget: BudgetTier,
    #[serde(default = "default_occasions")]
    pub occasions: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            archetype: default_archetype(),
            preferred_colors: Vec::new(),
            budget: BudgetTier::default(),
            occasions: default_occasions(),
        }
    }
}

fn default_archetype() -> String {
    "Casual".to_string()
}

fn default_occasions() -> Vec<String> {
    vec!["casual".to_string(), "everyday".to_string()]
}

fn budget_tier_or_amount<'de, D>(deserializer: D) -> Result<BudgetTier, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Tier(BudgetTier),
        Amount(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Tier(tier) => tier,
        Raw::Amount(amount) => BudgetTier::from_amount(amount),
    })
}

/// Request to generate a set of outfits for a session
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateOutfitsRequest {
    pub session_id: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub user_profile: UserProfile,
    #[serde(default)]
    pub season: Option<Season>,
    /// Named-dimension affinity scores in [0, 1], e.g. from mood photos
    #[serde(default)]
    pub visual_embedding: Option<HashMap<String, f64>>,
}

fn default_count() -> usize {
    3
}

/// Everything one generation request needs, assembled by the orchestrator
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub session_id: String,
    /// Number of prior feedback events for this session
    pub swipe_count: usize,
    /// Probability that an attempt ignores learned preferences
    pub exploration_rate: f64,
    pub user_profile: UserProfile,
    pub preferences: PreferenceModel,
    pub visual_embedding: Option<HashMap<String, f64>>,
    pub season: Option<Season>,
}
