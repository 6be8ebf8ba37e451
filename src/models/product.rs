use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A garment slot that must be filled to assemble a complete outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentSlot {
    Top,
    Bottom,
    Footwear,
}

impl GarmentSlot {
    /// The slots every outfit must fill, in assembly order
    pub const REQUIRED: [GarmentSlot; 3] =
        [GarmentSlot::Top, GarmentSlot::Bottom, GarmentSlot::Footwear];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentSlot::Top => "top",
            GarmentSlot::Bottom => "bottom",
            GarmentSlot::Footwear => "footwear",
        }
    }

    /// Whether a catalog category string fills this slot
    ///
    /// Catalog categories are free-form ("top", "footwear", but also
    /// "outerwear", "accessory"); matching is case-insensitive.
    pub fn matches_category(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case(self.as_str())
    }
}

impl Display for GarmentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product
///
/// Immutable; owned by the external catalog store. The `colors` list is
/// ordered with the most dominant color first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Slot key ("top", "bottom", "footwear") or any other catalog category
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
