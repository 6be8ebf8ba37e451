pub mod context;
pub mod feedback;
pub mod outfit;
pub mod product;

pub use context::{
    BudgetTier, GenerateOutfitsRequest, GenerationContext, PreferenceModel, PriceRange, Season,
    UserProfile,
};
pub use feedback::{FeedbackEvent, OutfitFeatures, SwipeDirection};
pub use outfit::{
    CandidateOutfit, OutfitScore, PatternComplexity, PriceBreakdown, PriceTier, VisualFeatures,
};
pub use product::{GarmentSlot, Product};
