use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{FeedbackEvent, OutfitFeatures, Product, SwipeDirection},
    services::providers::{CatalogProvider, FeedbackStore},
};

/// Catalog reads backed by the products table
#[derive(Clone)]
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    category: String,
    price: f64,
    colors: Vec<String>,
    style: Option<String>,
    tags: Vec<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            colors: row.colors,
            style: row.style,
            tags: row.tags,
        }
    }
}

#[async_trait]
impl CatalogProvider for PostgresCatalog {
    async fn get_active_products(&self, limit: u32) -> AppResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, category, price, colors, style, tags
            FROM products
            WHERE active = true
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(pool_size = rows.len(), "Loaded active products");

        Ok(rows.into_iter().map(Product::from).collect())
    }
}

/// Feedback persistence backed by the swipe_feedback table
#[derive(Clone)]
pub struct PostgresFeedbackStore {
    pool: PgPool,
}

impl PostgresFeedbackStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    session_id: String,
    user_id: Option<String>,
    outfit_id: Uuid,
    direction: String,
    colors: Vec<String>,
    styles: Vec<String>,
    total_price: f64,
    formality_score: i16,
    created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for FeedbackEvent {
    fn from(row: FeedbackRow) -> Self {
        let direction = SwipeDirection::parse(&row.direction).unwrap_or_else(|| {
            tracing::warn!(direction = %row.direction, "Unknown swipe direction in store, treating as neutral");
            SwipeDirection::Neutral
        });

        FeedbackEvent {
            session_id: row.session_id,
            user_id: row.user_id,
            outfit_id: row.outfit_id,
            direction,
            features: OutfitFeatures {
                colors: row.colors,
                styles: row.styles,
                total_price: row.total_price,
                formality_score: row.formality_score.clamp(1, 10) as u8,
            },
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl FeedbackStore for PostgresFeedbackStore {
    async fn get_feedback_history(&self, session_id: &str) -> AppResult<Vec<FeedbackEvent>> {
        let rows: Vec<FeedbackRow> = sqlx::query_as(
            r#"
            SELECT session_id, user_id, outfit_id, direction,
                   colors, styles, total_price, formality_score, created_at
            FROM swipe_feedback
            WHERE session_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeedbackEvent::from).collect())
    }

    async fn record_feedback(&self, event: FeedbackEvent) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO swipe_feedback
                (session_id, user_id, outfit_id, direction,
                 colors, styles, total_price, formality_score, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&event.session_id)
        .bind(&event.user_id)
        .bind(event.outfit_id)
        .bind(event.direction.as_str())
        .bind(&event.features.colors)
        .bind(&event.features.styles)
        .bind(event.features.total_price)
        .bind(event.features.formality_score as i16)
        .bind(event.created_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            session_id = %event.session_id,
            outfit_id = %event.outfit_id,
            direction = event.direction.as_str(),
            "Recorded feedback event"
        );

        Ok(())
    }
}
