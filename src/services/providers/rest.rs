/// Product-feed API provider
///
/// Fetches the active product pool from an external catalog feed over HTTP
/// and keeps a short-lived copy in redis so bursts of generation requests do
/// not hammer the feed. The cache is an optimization only: a failed cache
/// read falls through to the feed.
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::Product,
    services::providers::CatalogProvider,
};

const POOL_CACHE_TTL: u64 = 300; // 5 minutes

#[derive(Clone)]
pub struct RestCatalog {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
    cache: Cache,
}

impl RestCatalog {
    pub fn new(cache: Cache, api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
            cache,
        }
    }

    /// Calls the catalog feed for the active product pool
    async fn fetch_pool(&self, limit: u32) -> AppResult<Vec<Product>> {
        let url = format!("{}/products", self.api_url);

        let mut request = self
            .http_client
            .get(&url)
            .query(&[("active", "true".to_string()), ("limit", limit.to_string())]);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Catalog feed request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "Catalog feed returned status {}: {}",
                status, body
            )));
        }

        let products: Vec<FeedProduct> = response.json().await?;

        Ok(products.into_iter().map(Product::from).collect())
    }
}

/// Wire format of the catalog feed
#[derive(Debug, Clone, Deserialize)]
struct FeedProduct {
    id: String,
    name: String,
    category: String,
    price: f64,
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<FeedProduct> for Product {
    fn from(feed: FeedProduct) -> Self {
        Product {
            id: feed.id,
            name: feed.name,
            category: feed.category,
            price: feed.price,
            colors: feed.colors,
            style: feed.style,
            tags: feed.tags,
        }
    }
}

#[async_trait]
impl CatalogProvider for RestCatalog {
    async fn get_active_products(&self, limit: u32) -> AppResult<Vec<Product>> {
        let key = CacheKey::ProductPool(limit);

        let cached = match self.cache.get_from_cache::<Vec<Product>>(&key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Product pool cache read failed");
                None
            }
        };

        if let Some(pool) = cached {
            tracing::debug!(pool_size = pool.len(), "Product pool cache hit");
            return Ok(pool);
        }

        let products = self.fetch_pool(limit).await?;
        self.cache.set_in_background(&key, &products, POOL_CACHE_TTL);

        tracing::info!(
            pool_size = products.len(),
            "Fetched product pool from catalog feed"
        );

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_product_maps_to_product() {
        let json = r#"{
            "id": "feed_001",
            "name": "Oversized Wool Coat",
            "category": "outerwear",
            "price": 189.95,
            "colors": ["beige", "black"],
            "tags": ["minimalist", "winter"]
        }"#;

        let feed: FeedProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(feed);

        assert_eq!(product.id, "feed_001");
        assert_eq!(product.category, "outerwear");
        assert_eq!(product.colors, vec!["beige", "black"]);
        assert!(product.style.is_none());
    }
}
