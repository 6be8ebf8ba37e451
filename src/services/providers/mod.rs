/// External store abstractions
///
/// The product catalog and the feedback/event store are collaborators owned
/// outside this engine. Each is a pluggable trait object so the serving
/// layer can wire a Postgres-backed store, the REST catalog feed, or an
/// in-memory double in tests.
use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{FeedbackEvent, Product},
};

pub mod postgres;
pub mod rest;

pub use postgres::{PostgresCatalog, PostgresFeedbackStore};
pub use rest::RestCatalog;

/// Read contract for the product catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns up to `limit` currently-active catalog products
    ///
    /// No ordering guarantee: callers must not assume the pool is sorted by
    /// relevance.
    async fn get_active_products(&self, limit: u32) -> AppResult<Vec<Product>>;
}

/// Contracts for the append-only feedback/event store
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Returns all recorded feedback for a session, newest first
    ///
    /// Preference derivation does not depend on the order.
    async fn get_feedback_history(&self, session_id: &str) -> AppResult<Vec<FeedbackEvent>>;

    /// Persists one feedback event
    ///
    /// Callers must not block a user-visible response on completion; the
    /// write path is fire-and-forget from their perspective.
    async fn record_feedback(&self, event: FeedbackEvent) -> AppResult<()>;
}
