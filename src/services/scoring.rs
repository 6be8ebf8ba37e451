//! Pure scoring functions for assembled outfits.
//!
//! Every function here is total: unknown archetypes, empty color lists, and
//! missing season/embedding inputs all fall back to documented defaults, so
//! scoring can never fail an otherwise valid generation attempt. All state is
//! carried in named constant tables; there is no scorer object.

use std::collections::HashMap;

use crate::models::{
    BudgetTier, GenerationContext, OutfitScore, PatternComplexity, PriceTier, Product, Season,
};

struct ScoringWeights {
    style_match: f64,
    color_harmony: f64,
    price_optimization: f64,
    occasion_fit: f64,
    novelty: f64,
}

/// Weight vector for the five scoring dimensions; sums to 1.0
const SCORING_WEIGHTS: ScoringWeights = ScoringWeights {
    style_match: 0.30,
    color_harmony: 0.25,
    price_optimization: 0.20,
    occasion_fit: 0.15,
    novelty: 0.10,
};

// TODO: compare against previously shown outfits within the session
const NOVELTY_PLACEHOLDER: f64 = 0.80;

/// Archetype label → descriptive tag keywords checked against each product's
/// style field and tag list
const ARCHETYPE_STYLE_TAGS: &[(&str, &[&str])] = &[
    (
        "Minimalist",
        &["clean", "simple", "monochrome", "modern", "sleek"],
    ),
    (
        "Classic",
        &["timeless", "elegant", "refined", "sophisticated", "traditional"],
    ),
    ("Bold", &["statement", "vibrant", "edgy", "dramatic", "colorful"]),
    (
        "Casual",
        &["relaxed", "comfortable", "everyday", "laid-back", "easy"],
    ),
    (
        "Streetwear",
        &["urban", "trendy", "street", "sporty", "contemporary"],
    ),
    (
        "Bohemian",
        &["free-spirited", "eclectic", "artistic", "flowing", "natural"],
    ),
    (
        "Romantic",
        &["feminine", "soft", "delicate", "pretty", "vintage"],
    ),
];

const NEUTRAL_COLORS: &[&str] = &["black", "white", "grey", "gray", "beige", "cream", "navy"];
const WARM_COLORS: &[&str] = &["red", "orange", "yellow", "brown", "burgundy", "coral"];
const COOL_COLORS: &[&str] = &["blue", "green", "purple", "teal", "cyan", "mint"];
const EARTH_COLORS: &[&str] = &["brown", "tan", "olive", "khaki", "terracotta"];

const COLOR_FAMILIES: &[&[&str]] = &[NEUTRAL_COLORS, WARM_COLORS, COOL_COLORS, EARTH_COLORS];

/// Occasion name → target formality (1-10)
const OCCASION_FORMALITY: &[(&str, f64)] = &[
    ("casual", 2.0),
    ("everyday", 3.0),
    ("work", 6.0),
    ("business", 7.0),
    ("smart-casual", 5.0),
    ("evening", 7.0),
    ("formal", 9.0),
    ("party", 6.0),
    ("date", 7.0),
    ("weekend", 3.0),
    ("sport", 1.0),
    ("brunch", 4.0),
];

const DEFAULT_TARGET_FORMALITY: f64 = 5.0;

/// Keyword → formality (1-10), scanned in order; the first hit per product
/// wins
const FORMALITY_KEYWORDS: &[(&str, u32)] = &[
    // Very casual
    ("joggers", 1),
    ("sweatpants", 1),
    ("hoodie", 2),
    ("sneakers", 2),
    ("t-shirt", 2),
    ("shorts", 2),
    ("flip-flops", 1),
    ("tank", 2),
    ("athletic", 1),
    // Casual
    ("jeans", 4),
    ("casual", 4),
    ("polo", 5),
    ("chinos", 5),
    ("loafers", 5),
    ("sweater", 5),
    ("cardigan", 5),
    ("boots", 5),
    // Smart casual
    ("blazer", 7),
    ("dress shirt", 7),
    ("blouse", 6),
    ("oxford", 6),
    ("derby", 7),
    ("slacks", 6),
    ("pencil skirt", 7),
    ("midi dress", 6),
    // Formal
    ("suit", 9),
    ("tuxedo", 10),
    ("gown", 9),
    ("evening", 9),
    ("formal", 9),
    ("dress shoes", 8),
    ("heels", 7),
    ("tie", 8),
    ("bow tie", 9),
];

const MINIMAL_PATTERN_KEYWORDS: &[&str] =
    &["solid", "plain", "simple", "monochrome", "clean", "basic"];
const DETAILED_PATTERN_KEYWORDS: &[&str] = &[
    "print",
    "pattern",
    "floral",
    "striped",
    "checkered",
    "graphic",
    "embroidered",
    "textured",
];

fn seasonal_palette(season: Season) -> &'static [&'static str] {
    match season {
        Season::Spring => &["pastel", "pink", "mint", "yellow", "lavender", "peach", "coral"],
        Season::Summer => &[
            "white",
            "light blue",
            "yellow",
            "coral",
            "turquoise",
            "lime",
            "bright",
        ],
        Season::Autumn => &[
            "burgundy",
            "brown",
            "orange",
            "olive",
            "rust",
            "camel",
            "terracotta",
        ],
        Season::Winter => &[
            "navy", "black", "grey", "burgundy", "forest", "charcoal", "plum",
        ],
    }
}

fn budget_target(budget: BudgetTier) -> f64 {
    match budget {
        BudgetTier::Low => 150.0,
        BudgetTier::Medium => 250.0,
        BudgetTier::High => 500.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lowercased style + tags text used for keyword containment checks
fn style_search_text(product: &Product) -> String {
    let style = product.style.as_deref().unwrap_or("").to_lowercase();
    let tags = product
        .tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {}", style, tags)
}

/// Computes all five sub-scores and the weighted overall for one assembled
/// outfit
///
/// `colors` is the outfit's combined unique color list. Each returned value
/// is rounded to 2 decimals; the overall is the weighted sum of the
/// unrounded sub-scores.
pub fn score_outfit(
    products: &[Product],
    colors: &[String],
    total_price: f64,
    context: &GenerationContext,
) -> OutfitScore {
    let style_match = score_style_match(
        products,
        &context.user_profile.archetype,
        context.visual_embedding.as_ref(),
    );
    let color_harmony = score_color_harmony(colors, context.season);
    let price_optimization = score_price_optimization(
        total_price,
        context.user_profile.budget,
        context
            .preferences
            .price_range
            .as_ref()
            .map(|range| range.preferred_avg),
    );
    let occasion_fit = score_occasion_fit(products, &context.user_profile.occasions);
    let novelty = NOVELTY_PLACEHOLDER;

    let overall = style_match * SCORING_WEIGHTS.style_match
        + color_harmony * SCORING_WEIGHTS.color_harmony
        + price_optimization * SCORING_WEIGHTS.price_optimization
        + occasion_fit * SCORING_WEIGHTS.occasion_fit
        + novelty * SCORING_WEIGHTS.novelty;

    OutfitScore {
        style_match: round2(style_match),
        color_harmony: round2(color_harmony),
        price_optimization: round2(price_optimization),
        occasion_fit: round2(occasion_fit),
        novelty: round2(novelty),
        overall: round2(overall),
    }
}

/// How well the outfit matches the profile archetype
///
/// Counts archetype keywords appearing across the products' style fields and
/// tag lists; base score is `min(0.95, 0.60 + hit_ratio * 0.35)`, with 0.75
/// for unknown archetypes. A supplied visual embedding can lift the base
/// score by at most 15%.
pub fn score_style_match(
    products: &[Product],
    archetype: &str,
    visual_embedding: Option<&HashMap<String, f64>>,
) -> f64 {
    let target_tags = ARCHETYPE_STYLE_TAGS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(archetype))
        .map(|(_, tags)| *tags);

    let mut score = match target_tags {
        Some(tags) => {
            let mut matches = 0usize;
            let mut checks = 0usize;

            for product in products {
                let style = product.style.as_deref().unwrap_or("").to_lowercase();
                let product_tags: Vec<String> =
                    product.tags.iter().map(|t| t.to_lowercase()).collect();

                for tag in tags {
                    checks += 1;
                    if style.contains(tag) || product_tags.iter().any(|t| t.contains(tag)) {
                        matches += 1;
                    }
                }
            }

            if checks > 0 {
                (0.60 + (matches as f64 / checks as f64) * 0.35).min(0.95)
            } else {
                0.75
            }
        }
        None => 0.75,
    };

    if let Some(embedding) = visual_embedding {
        if !embedding.is_empty() {
            let boost = visual_embedding_boost(products, embedding);
            score = (score * (1.0 + boost * 0.15)).min(1.0);
        }
    }

    score
}

/// Average affinity of embedding dimensions (affinity > 0.5) whose names
/// appear in a product's style/tag text
fn visual_embedding_boost(products: &[Product], embedding: &HashMap<String, f64>) -> f64 {
    let mut total = 0.0;
    let mut hits = 0usize;

    for product in products {
        let text = style_search_text(product);
        for (dimension, affinity) in embedding {
            if *affinity > 0.5 && text.contains(&dimension.to_lowercase()) {
                total += affinity;
                hits += 1;
            }
        }
    }

    if hits > 0 {
        total / hits as f64
    } else {
        0.0
    }
}

fn in_family(color: &str, family: &[&str]) -> bool {
    family.iter().any(|member| color.contains(member))
}

/// Color-theory harmony over the outfit's combined palette
///
/// A single color is trivially harmonious; otherwise neutral presence and
/// same-family membership drive the score. A supplied season adds up to
/// +0.10 for palette-matching colors, capped at 1.0.
pub fn score_color_harmony(colors: &[String], season: Option<Season>) -> f64 {
    let lowered: Vec<String> = colors.iter().map(|c| c.to_lowercase()).collect();

    let base = match lowered.len() {
        0 => 0.50,
        1 => 1.0,
        n => {
            let has_neutral = lowered.iter().any(|c| in_family(c, NEUTRAL_COLORS));
            let same_family = COLOR_FAMILIES
                .iter()
                .any(|family| lowered.iter().all(|c| in_family(c, family)));

            if n == 2 {
                if has_neutral || same_family {
                    0.95
                } else {
                    0.85
                }
            } else if n == 3 {
                if has_neutral && same_family {
                    0.90
                } else if has_neutral || same_family {
                    0.80
                } else {
                    0.70
                }
            } else if has_neutral {
                0.75
            } else {
                0.65
            }
        }
    };

    match season {
        Some(season) => {
            let palette = seasonal_palette(season);
            let matching = lowered
                .iter()
                .filter(|c| palette.iter().any(|p| c.contains(p)))
                .count();
            let boost = (matching as f64 / lowered.len().max(1) as f64) * 0.10;
            (base + boost).min(1.0)
        }
        None => base,
    }
}

/// Linear falloff from the target spend
///
/// The target is the learned preferred average when one exists, otherwise
/// the budget-tier default; the score reaches 0 once the deviation hits 50%
/// of the target.
pub fn score_price_optimization(
    total_price: f64,
    budget: BudgetTier,
    preferred_avg: Option<f64>,
) -> f64 {
    let target = preferred_avg.unwrap_or_else(|| budget_target(budget));
    let deviation = (total_price - target).abs();
    let max_deviation = target * 0.5;

    (1.0 - deviation / max_deviation).max(0.0)
}

/// Occasion appropriateness via formality distance
///
/// Averages the target formality over the requested occasions (5 when none
/// are given or an occasion is unknown) and buckets the distance to the
/// outfit's own formality.
pub fn score_occasion_fit(products: &[Product], occasions: &[String]) -> f64 {
    let target = if occasions.is_empty() {
        DEFAULT_TARGET_FORMALITY
    } else {
        let sum: f64 = occasions
            .iter()
            .map(|occasion| {
                let lower = occasion.to_lowercase();
                OCCASION_FORMALITY
                    .iter()
                    .find(|(name, _)| *name == lower)
                    .map(|(_, formality)| *formality)
                    .unwrap_or(DEFAULT_TARGET_FORMALITY)
            })
            .sum();
        sum / occasions.len() as f64
    };

    let difference = (formality_score(products) as f64 - target).abs();

    if difference <= 1.0 {
        0.95
    } else if difference <= 2.0 {
        0.85
    } else if difference <= 3.0 {
        0.70
    } else {
        0.55
    }
}

/// Estimates outfit dressiness on a 1-10 scale
///
/// Each product contributes the formality of the first keyword found in its
/// name, category, and style text; products with no keyword hit fall back to
/// a per-category default. The outfit score is the rounded mean.
pub fn formality_score(products: &[Product]) -> u8 {
    if products.is_empty() {
        return 5;
    }

    let mut total = 0u32;
    for product in products {
        let category = product.category.to_lowercase();
        let text = format!(
            "{} {} {}",
            product.name.to_lowercase(),
            category,
            product.style.as_deref().unwrap_or("").to_lowercase()
        );

        let keyword_hit = FORMALITY_KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword));

        total += match keyword_hit {
            Some((_, formality)) => *formality,
            None => {
                if category.contains("bottom") || category.contains("pants") {
                    4
                } else if category.contains("top") || category.contains("shirt") {
                    4
                } else if category.contains("footwear") || category.contains("shoes") {
                    5
                } else {
                    5
                }
            }
        };
    }

    ((total as f64 / products.len() as f64).round() as u8).clamp(1, 10)
}

/// Rough visual-complexity estimate from descriptive keywords
pub fn pattern_complexity(products: &[Product]) -> PatternComplexity {
    let mut minimal = 0usize;
    let mut detailed = 0usize;

    for product in products {
        let text = format!(
            "{} {}",
            product.name.to_lowercase(),
            style_search_text(product)
        );

        minimal += MINIMAL_PATTERN_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count();
        detailed += DETAILED_PATTERN_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count();
    }

    if detailed > minimal * 2 {
        PatternComplexity::Detailed
    } else if minimal > detailed * 2 {
        PatternComplexity::Minimal
    } else {
        PatternComplexity::Moderate
    }
}

/// Classifies an outfit's total price into a coarse tier
pub fn price_tier(total: f64) -> PriceTier {
    if total <= 200.0 {
        PriceTier::Budget
    } else if total <= 400.0 {
        PriceTier::Mid
    } else {
        PriceTier::Premium
    }
}

/// Quality-for-price proxy based on the average item price
pub fn value_score(products: &[Product], total_price: f64) -> f64 {
    if products.is_empty() {
        return 0.6;
    }

    let average = total_price / products.len() as f64;
    if average < 50.0 {
        0.6
    } else if average < 100.0 {
        0.8
    } else {
        0.95
    }
}

/// Occasion label for a formality score, used for display
pub fn occasion_label(formality: u8) -> &'static str {
    match formality {
        8..=10 => "formal",
        6..=7 => "work",
        4..=5 => "smart-casual",
        _ => "casual",
    }
}
