#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ensemble_api::{
    error::{AppError, AppResult},
    models::{FeedbackEvent, Product},
    routes::AppState,
    services::providers::{CatalogProvider, FeedbackStore},
};

/// Catalog double serving a fixed product list
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn get_active_products(&self, limit: u32) -> AppResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Catalog double that always fails, for degradation tests
pub struct FailingCatalog;

#[async_trait]
impl CatalogProvider for FailingCatalog {
    async fn get_active_products(&self, _limit: u32) -> AppResult<Vec<Product>> {
        Err(AppError::ExternalApi("catalog unavailable".to_string()))
    }
}

/// Feedback store double recording into a shared Vec
#[derive(Default)]
pub struct InMemoryFeedbackStore {
    pub events: Mutex<Vec<FeedbackEvent>>,
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn get_feedback_history(&self, session_id: &str) -> AppResult<Vec<FeedbackEvent>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn record_feedback(&self, event: FeedbackEvent) -> AppResult<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Feedback store double that always fails
pub struct FailingFeedbackStore;

#[async_trait]
impl FeedbackStore for FailingFeedbackStore {
    async fn get_feedback_history(&self, _session_id: &str) -> AppResult<Vec<FeedbackEvent>> {
        Err(AppError::Internal("event store down".to_string()))
    }

    async fn record_feedback(&self, _event: FeedbackEvent) -> AppResult<()> {
        Err(AppError::Internal("event store down".to_string()))
    }
}

pub fn state_with(
    catalog: Arc<dyn CatalogProvider>,
    feedback: Arc<dyn FeedbackStore>,
) -> Arc<AppState> {
    Arc::new(AppState { catalog, feedback })
}

pub fn product(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    colors: &[&str],
    style: Option<&str>,
    tags: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        colors: colors.iter().map(|c| c.to_string()).collect(),
        style: style.map(|s| s.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// A small but varied pool covering every required slot
pub fn sample_pool() -> Vec<Product> {
    vec![
        product(
            "top_blouse",
            "Silk Blouse",
            "top",
            89.95,
            &["white", "cream"],
            Some("elegant"),
            &["elegant", "formal", "classic"],
        ),
        product(
            "top_tee",
            "Plain Cotton T-Shirt",
            "top",
            19.99,
            &["black"],
            Some("casual"),
            &["basic", "solid", "everyday"],
        ),
        product(
            "top_blazer",
            "Structured Blazer",
            "top",
            149.5,
            &["navy"],
            Some("classic"),
            &["timeless", "refined"],
        ),
        product(
            "bottom_jeans",
            "High-Waist Jeans",
            "bottom",
            69.99,
            &["blue"],
            Some("casual"),
            &["denim", "vintage"],
        ),
        product(
            "bottom_slacks",
            "Tailored Slacks",
            "bottom",
            110.0,
            &["charcoal"],
            Some("classic"),
            &["refined", "sophisticated"],
        ),
        product(
            "bottom_skirt",
            "Pencil Skirt",
            "bottom",
            79.0,
            &["black"],
            Some("elegant"),
            &["timeless"],
        ),
        product(
            "shoes_sneakers",
            "Minimalist Sneakers",
            "footwear",
            120.0,
            &["white"],
            Some("minimalist"),
            &["clean", "simple", "sustainable"],
        ),
        product(
            "shoes_heels",
            "Leather Heels",
            "footwear",
            160.0,
            &["black"],
            Some("elegant"),
            &["refined", "evening"],
        ),
        product(
            "shoes_boots",
            "Chelsea Boots",
            "footwear",
            140.0,
            &["brown"],
            Some("classic"),
            &["timeless", "leather"],
        ),
    ]
}
