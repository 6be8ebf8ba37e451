use rand::Rng;

use crate::models::{GarmentSlot, PreferenceModel, Product};

/// Generation strategy for one outfit attempt
///
/// Threaded explicitly through slot selection and insight text so callers
/// and tests can see which path an attempt took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Ignore learned preferences to surface novel combinations
    Exploratory,
    /// Bias toward liked colors/styles and the learned price band
    Optimized,
}

impl Strategy {
    /// One uniform draw against the exploration rate
    pub fn draw<R: Rng + ?Sized>(exploration_rate: f64, rng: &mut R) -> Self {
        if rng.gen::<f64>() < exploration_rate {
            Strategy::Exploratory
        } else {
            Strategy::Optimized
        }
    }
}

/// Chooses one product for a slot
///
/// Returns None only when the pool has no candidates for the slot at all;
/// preference filtering that empties the slot falls back to the unfiltered
/// slot pool instead.
pub fn select_for_slot<'a, R: Rng + ?Sized>(
    pool: &'a [Product],
    slot: GarmentSlot,
    preferences: &PreferenceModel,
    strategy: Strategy,
    rng: &mut R,
) -> Option<&'a Product> {
    let slot_pool: Vec<&Product> = pool
        .iter()
        .filter(|p| slot.matches_category(&p.category))
        .collect();

    if slot_pool.is_empty() {
        return None;
    }

    let candidates = match strategy {
        Strategy::Exploratory => slot_pool.clone(),
        Strategy::Optimized => {
            let filtered = apply_preferences(&slot_pool, preferences);
            if filtered.is_empty() {
                slot_pool.clone()
            } else {
                filtered
            }
        }
    };

    Some(pick_bounded_random(&candidates, rng))
}

/// Narrows a slot pool by learned preferences
///
/// Disliked colors are excluded, prices are limited to the learned band with
/// 20% tolerance on both ends, and among the remainder products matching
/// liked colors and liked styles are preferred (both > colors > styles >
/// anything left).
fn apply_preferences<'a>(
    slot_pool: &[&'a Product],
    preferences: &PreferenceModel,
) -> Vec<&'a Product> {
    let price_range = preferences.price_range.clone().unwrap_or_default();
    let price_min = price_range.min * 0.8;
    let price_max = price_range.max * 1.2;

    let filtered: Vec<&Product> = slot_pool
        .iter()
        .copied()
        .filter(|p| {
            !p.colors
                .iter()
                .any(|color| preferences.disliked_colors.contains(color))
        })
        .filter(|p| p.price >= price_min && p.price <= price_max)
        .collect();

    let with_liked_colors: Vec<&Product> = filtered
        .iter()
        .copied()
        .filter(|p| {
            p.colors
                .iter()
                .any(|color| preferences.liked_colors.contains(color))
        })
        .collect();

    let with_liked_styles: Vec<&Product> = filtered
        .iter()
        .copied()
        .filter(|p| match &p.style {
            Some(style) => preferences
                .liked_styles
                .iter()
                .any(|liked| style.contains(liked)),
            None => false,
        })
        .collect();

    let both: Vec<&Product> = with_liked_colors
        .iter()
        .copied()
        .filter(|p| with_liked_styles.iter().any(|q| q.id == p.id))
        .collect();

    if !both.is_empty() {
        both
    } else if !with_liked_colors.is_empty() {
        with_liked_colors
    } else if !with_liked_styles.is_empty() {
        with_liked_styles
    } else {
        filtered
    }
}

/// Takes the top 30% of candidates (at least one) in pool order and picks
/// uniformly among them
///
/// This bounds randomness to "good enough" choices, but it leans on the
/// upstream candidate ordering carrying a relevance signal. The catalog
/// contract makes no ordering guarantee, so with an unordered pool this
/// degrades to a uniform pick over an arbitrary 30% slice.
fn pick_bounded_random<'a, R: Rng + ?Sized>(candidates: &[&'a Product], rng: &mut R) -> &'a Product {
    let top_n = ((candidates.len() as f64 * 0.3).ceil() as usize).max(1);
    candidates[rng.gen_range(0..top_n)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRange;
    use rand::{rngs::StdRng, SeedableRng};

    fn product(id: &str, category: &str, price: f64, colors: &[&str], style: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            category: category.to_string(),
            price,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            style: style.map(|s| s.to_string()),
            tags: Vec::new(),
        }
    }

    fn model_with(
        liked_colors: &[&str],
        disliked_colors: &[&str],
        liked_styles: &[&str],
        price_range: Option<PriceRange>,
    ) -> PreferenceModel {
        PreferenceModel {
            liked_colors: liked_colors.iter().map(|c| c.to_string()).collect(),
            disliked_colors: disliked_colors.iter().map(|c| c.to_string()).collect(),
            liked_styles: liked_styles.iter().map(|s| s.to_string()).collect(),
            price_range,
            ..PreferenceModel::default()
        }
    }

    #[test]
    fn test_empty_slot_returns_none() {
        let pool = vec![product("p1", "top", 50.0, &["black"], None)];
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select_for_slot(
            &pool,
            GarmentSlot::Footwear,
            &PreferenceModel::default(),
            Strategy::Optimized,
            &mut rng,
        );
        assert!(picked.is_none());
    }

    #[test]
    fn test_pick_stays_within_top_30_percent() {
        let pool: Vec<Product> = (0..10)
            .map(|i| product(&format!("p{}", i), "top", 50.0, &["black"], None))
            .collect();

        // 10 candidates -> top 3 eligible
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_for_slot(
                &pool,
                GarmentSlot::Top,
                &PreferenceModel::default(),
                Strategy::Exploratory,
                &mut rng,
            )
            .unwrap();
            assert!(["p0", "p1", "p2"].contains(&picked.id.as_str()));
        }
    }

    #[test]
    fn test_selection_is_deterministic_for_a_seed() {
        let pool: Vec<Product> = (0..10)
            .map(|i| product(&format!("p{}", i), "top", 50.0, &["black"], None))
            .collect();

        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        let a = select_for_slot(
            &pool,
            GarmentSlot::Top,
            &PreferenceModel::default(),
            Strategy::Optimized,
            &mut first,
        )
        .unwrap();
        let b = select_for_slot(
            &pool,
            GarmentSlot::Top,
            &PreferenceModel::default(),
            Strategy::Optimized,
            &mut second,
        )
        .unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_optimized_excludes_disliked_colors() {
        let pool = vec![
            product("red_top", "top", 50.0, &["red"], None),
            product("blue_top", "top", 50.0, &["blue"], None),
        ];
        let model = model_with(&[], &["red"], &[], None);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked =
                select_for_slot(&pool, GarmentSlot::Top, &model, Strategy::Optimized, &mut rng)
                    .unwrap();
            assert_eq!(picked.id, "blue_top");
        }
    }

    #[test]
    fn test_optimized_applies_price_window() {
        let pool = vec![
            product("pricey", "top", 300.0, &["black"], None),
            product("fits", "top", 120.0, &["black"], None),
        ];
        // Learned band 100-200 widens to 80-240
        let model = model_with(
            &[],
            &[],
            &[],
            Some(PriceRange {
                min: 100.0,
                max: 200.0,
                preferred_avg: 150.0,
            }),
        );

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked =
                select_for_slot(&pool, GarmentSlot::Top, &model, Strategy::Optimized, &mut rng)
                    .unwrap();
            assert_eq!(picked.id, "fits");
        }
    }

    #[test]
    fn test_optimized_prefers_products_matching_both_subsets() {
        let pool = vec![
            product("color_only", "top", 50.0, &["black"], Some("bold")),
            product("both", "top", 50.0, &["black"], Some("minimalist")),
            product("neither", "top", 50.0, &["pink"], None),
        ];
        let model = model_with(&["black"], &[], &["minimalist"], None);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked =
                select_for_slot(&pool, GarmentSlot::Top, &model, Strategy::Optimized, &mut rng)
                    .unwrap();
            assert_eq!(picked.id, "both");
        }
    }

    #[test]
    fn test_optimized_falls_back_to_slot_pool_when_filters_empty_it() {
        let pool = vec![
            product("a", "top", 50.0, &["red"], None),
            product("b", "top", 50.0, &["red"], None),
        ];
        let model = model_with(&[], &["red"], &[], None);

        let mut rng = StdRng::seed_from_u64(1);
        let picked =
            select_for_slot(&pool, GarmentSlot::Top, &model, Strategy::Optimized, &mut rng);
        assert!(picked.is_some());
    }

    #[test]
    fn test_exploratory_ignores_preferences() {
        let pool = vec![product("red_top", "top", 999.0, &["red"], None)];
        let model = model_with(
            &[],
            &["red"],
            &[],
            Some(PriceRange {
                min: 10.0,
                max: 20.0,
                preferred_avg: 15.0,
            }),
        );

        let mut rng = StdRng::seed_from_u64(3);
        let picked =
            select_for_slot(&pool, GarmentSlot::Top, &model, Strategy::Exploratory, &mut rng)
                .unwrap();
        assert_eq!(picked.id, "red_top");
    }

    #[test]
    fn test_strategy_draw_extremes() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            assert_eq!(Strategy::draw(0.0, &mut rng), Strategy::Optimized);
            assert_eq!(Strategy::draw(1.1, &mut rng), Strategy::Exploratory);
        }
    }
}
