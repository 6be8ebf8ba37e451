use std::collections::HashSet;

use uuid::Uuid;

use crate::models::{CandidateOutfit, PatternComplexity, PriceTier};

/// Coarse signature used to detect near-duplicate outfits
struct Fingerprint {
    color_key: String,
    tier: PriceTier,
    formality_bucket: u8,
}

fn fingerprint(outfit: &CandidateOutfit) -> Fingerprint {
    let mut colors: Vec<String> = outfit
        .visual_features
        .dominant_colors
        .iter()
        .take(2)
        .cloned()
        .collect();
    colors.sort();

    Fingerprint {
        color_key: colors.join("-"),
        tier: outfit.price_breakdown.tier,
        formality_bucket: (outfit.visual_features.formality_score / 2) * 2,
    }
}

/// Selects up to `target` outfits maximizing fingerprint variety
///
/// Walks the candidates in descending score order and accepts an outfit when
/// it introduces enough new fingerprint components; the first two slots are
/// always granted so poor diversity never empties the result. Remaining
/// slots backfill with the highest-scoring leftovers. Scores are never
/// altered, and the returned outfits carry their UI badges.
pub fn select_diverse(mut outfits: Vec<CandidateOutfit>, target: usize) -> Vec<CandidateOutfit> {
    outfits.sort_by(|a, b| b.score.overall.total_cmp(&a.score.overall));

    let mut used_color_keys: HashSet<String> = HashSet::new();
    let mut used_tiers: HashSet<PriceTier> = HashSet::new();
    let mut used_formality: HashSet<u8> = HashSet::new();
    let mut accepted_ids: HashSet<Uuid> = HashSet::new();
    let mut selected: Vec<CandidateOutfit> = Vec::new();

    for outfit in &outfits {
        if selected.len() >= target {
            break;
        }

        let print = fingerprint(outfit);

        let mut diversity_bonus = 0.0;
        if !used_color_keys.contains(&print.color_key) {
            diversity_bonus += 0.3;
        }
        if !used_tiers.contains(&print.tier) {
            diversity_bonus += 0.2;
        }
        if !used_formality.contains(&print.formality_bucket) {
            diversity_bonus += 0.2;
        }

        if diversity_bonus > 0.3 || selected.len() < 2 {
            used_color_keys.insert(print.color_key);
            used_tiers.insert(print.tier);
            used_formality.insert(print.formality_bucket);
            accepted_ids.insert(outfit.id);
            selected.push(outfit.clone());
        }
    }

    // Backfill with the best leftovers when diversity fell short of target
    if selected.len() < target {
        for outfit in &outfits {
            if selected.len() >= target {
                break;
            }
            if accepted_ids.insert(outfit.id) {
                selected.push(outfit.clone());
            }
        }
    }

    attach_badges(selected)
}

/// Post-hoc UI badges; several can apply to one outfit
fn attach_badges(outfits: Vec<CandidateOutfit>) -> Vec<CandidateOutfit> {
    outfits
        .into_iter()
        .enumerate()
        .map(|(index, mut outfit)| {
            let mut badges: Vec<&str> = Vec::new();

            if index == 0 {
                badges.push("Top Match");
            }
            match outfit.price_breakdown.tier {
                PriceTier::Budget => badges.push("Best Value"),
                PriceTier::Premium => badges.push("Premium"),
                PriceTier::Mid => {}
            }
            if outfit.visual_features.formality_score >= 7 {
                badges.push("Elegant");
            }
            if outfit.visual_features.formality_score <= 3 {
                badges.push("Casual");
            }
            if outfit.visual_features.pattern_complexity == PatternComplexity::Minimal {
                badges.push("Minimalist");
            }
            if outfit.visual_features.dominant_colors.len() == 1 {
                badges.push("Monochrome");
            }

            outfit.badges = badges.into_iter().map(String::from).collect();
            outfit
        })
        .collect()
}
