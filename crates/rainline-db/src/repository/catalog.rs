//! # Catalog Repository
//!
//! Database operations for the product catalog.
//!
//! ## The Batch Pricing Read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 How fetch_pricing Works                                 │
//! │                                                                         │
//! │  Expansion produced: {GUT-SC-MAR-3M, BRK-SC-MAR, SCR-SS, LAB-STD}      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ONE query: SELECT ... WHERE is_active = 1 AND id IN (?, ?, ?, ?)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ GUT-SC-MAR-3M │ cost 1600 │ bps 2000    │ ← found                   │
//! │  │ SCR-SS        │ cost    5 │ bps 10000   │ ← found                   │
//! │  │ LAB-STD       │ cost 8000 │ bps 2500    │ ← found                   │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BRK-SC-MAR simply absent from the rows (not an error here;            │
//! │  the Pricing Resolver decides what absence means)                      │
//! │                                                                         │
//! │  One round trip per quote, never one per line (no N+1).                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};

// =============================================================================
// Row Types
// =============================================================================

/// A full catalog row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CatalogProduct {
    /// Business identifier, e.g. "GUT-SC-MAR-3M".
    pub id: String,

    /// Display name shown on the quote.
    pub name: String,

    /// Cost price in cents. None means the row can never price a line.
    pub cost_cents: Option<i64>,

    /// Markup in basis points (2500 = 25%).
    pub markup_bps: i64,

    /// Billing unit: "each", "metre", "hour".
    pub unit: String,

    /// Soft delete flag; inactive rows never price a quote.
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogProduct {
    /// Creates an active catalog row stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost_cents: Option<i64>,
        markup_bps: i64,
        unit: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        CatalogProduct {
            id: id.into(),
            name: name.into(),
            cost_cents,
            markup_bps,
            unit: unit.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The slim projection the pricing lookup returns.
///
/// `cost_cents` stays optional here: the row exists but may still be
/// unpriceable. The Pricing Resolver (rainline-engine) owns that decision;
/// this layer just reports what the catalog says.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PricingRow {
    pub id: String,
    pub name: String,
    pub cost_cents: Option<i64>,
    pub markup_bps: i64,
    pub unit: Option<String>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for catalog database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CatalogRepository::new(pool);
///
/// // Batch pricing read (the pipeline's only catalog access)
/// let rows = repo.fetch_pricing(&ids).await?;
///
/// // Maintenance surface (seed tool, import)
/// repo.insert(&product).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Fetches pricing rows for a batch of identifiers in ONE query.
    ///
    /// ## Behavior
    /// - Identifiers match case-insensitively; rows come back with the
    ///   catalog's canonical spelling
    /// - Rows for unknown identifiers are simply omitted, not errored
    /// - Inactive (soft-deleted) rows are omitted
    /// - Empty input returns an empty Vec without touching the database
    ///
    /// ## Why Batch
    /// The quote pipeline issues exactly one catalog read per invocation
    /// to bound latency; per-line lookups would be an N+1 pattern.
    pub async fn fetch_pricing(&self, ids: &[String]) -> DbResult<Vec<PricingRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(requested = ids.len(), "Fetching catalog pricing batch");

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, name, cost_cents, markup_bps, unit \
             FROM products WHERE is_active = 1 AND id COLLATE NOCASE IN (",
        );
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        builder.push(")");

        let rows = builder
            .build_query_as::<PricingRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(found = rows.len(), "Pricing batch returned rows");
        Ok(rows)
    }

    /// Gets a catalog row by its identifier.
    ///
    /// ## Returns
    /// * `Ok(Some(CatalogProduct))` - Row found
    /// * `Ok(None)` - No row with this identifier
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<CatalogProduct>> {
        let product = sqlx::query_as::<_, CatalogProduct>(
            "SELECT id, name, cost_cents, markup_bps, unit, is_active, created_at, updated_at \
             FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new catalog row.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - Identifier already exists
    pub async fn insert(&self, product: &CatalogProduct) -> DbResult<()> {
        debug!(id = %product.id, "Inserting catalog row");

        sqlx::query(
            "INSERT INTO products \
             (id, name, cost_cents, markup_bps, unit, is_active, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.cost_cents)
        .bind(product.markup_bps)
        .bind(&product.unit)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates cost and markup for an existing row.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Identifier doesn't exist
    pub async fn update_pricing(
        &self,
        id: &str,
        cost_cents: Option<i64>,
        markup_bps: i64,
    ) -> DbResult<()> {
        debug!(id = %id, "Updating catalog pricing");

        let result = sqlx::query(
            "UPDATE products SET cost_cents = ?2, markup_bps = ?3, updated_at = ?4 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(cost_cents)
        .bind(markup_bps)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Soft-deletes a catalog row by setting is_active = false.
    ///
    /// ## Why Soft Delete?
    /// - Saved quotes may still reference this identifier
    /// - Can be restored if deactivated by mistake
    pub async fn deactivate(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deactivating catalog row");

        let result = sqlx::query("UPDATE products SET is_active = 0, updated_at = ?2 WHERE id = ?1")
            .bind(id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts active catalog rows (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = test_db().await;
        let repo = db.catalog();

        let product = CatalogProduct::new("SCR-SS", "Stainless Steel Screw", Some(5), 10000, "each");
        repo.insert(&product).await.unwrap();

        let fetched = repo.get_by_id("SCR-SS").await.unwrap().unwrap();
        assert_eq!(fetched.name, "Stainless Steel Screw");
        assert_eq!(fetched.cost_cents, Some(5));
        assert_eq!(fetched.markup_bps, 10000);
        assert!(fetched.is_active);

        assert!(repo.get_by_id("MISSING").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_unique_violation() {
        let db = test_db().await;
        let repo = db.catalog();

        let product = CatalogProduct::new("SCR-SS", "Screw", Some(5), 0, "each");
        repo.insert(&product).await.unwrap();

        let err = repo.insert(&product).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_fetch_pricing_batch() {
        let db = test_db().await;
        let repo = db.catalog();

        repo.insert(&CatalogProduct::new("SCR-SS", "Screw", Some(5), 10000, "each"))
            .await
            .unwrap();
        repo.insert(&CatalogProduct::new("BRK-SC-MAR", "Bracket", Some(100), 5000, "each"))
            .await
            .unwrap();
        // Row with no cost still comes back; the resolver decides its fate.
        repo.insert(&CatalogProduct::new("DP-65-3M", "Downpipe", None, 2000, "each"))
            .await
            .unwrap();

        let ids: Vec<String> = ["SCR-SS", "BRK-SC-MAR", "DP-65-3M", "UNKNOWN"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = repo.fetch_pricing(&ids).await.unwrap();

        // UNKNOWN is omitted, not errored.
        assert_eq!(rows.len(), 3);
        let costless = rows.iter().find(|r| r.id == "DP-65-3M").unwrap();
        assert!(costless.cost_cents.is_none());
    }

    #[tokio::test]
    async fn test_fetch_pricing_matches_case_insensitively() {
        let db = test_db().await;
        let repo = db.catalog();

        repo.insert(&CatalogProduct::new("SCR-SS", "Screw", Some(5), 0, "each"))
            .await
            .unwrap();

        let rows = repo
            .fetch_pricing(&["scr-ss".to_string()])
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        // Canonical catalog spelling comes back, not the request spelling.
        assert_eq!(rows[0].id, "SCR-SS");
    }

    #[tokio::test]
    async fn test_fetch_pricing_empty_input_skips_query() {
        let db = test_db().await;
        let rows = db.catalog().fetch_pricing(&[]).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_pricing_omits_inactive_rows() {
        let db = test_db().await;
        let repo = db.catalog();

        repo.insert(&CatalogProduct::new("SCR-SS", "Screw", Some(5), 0, "each"))
            .await
            .unwrap();
        repo.deactivate("SCR-SS").await.unwrap();

        let rows = repo
            .fetch_pricing(&["SCR-SS".to_string()])
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_update_pricing() {
        let db = test_db().await;
        let repo = db.catalog();

        repo.insert(&CatalogProduct::new("SCR-SS", "Screw", Some(5), 0, "each"))
            .await
            .unwrap();
        repo.update_pricing("SCR-SS", Some(7), 5000).await.unwrap();

        let fetched = repo.get_by_id("SCR-SS").await.unwrap().unwrap();
        assert_eq!(fetched.cost_cents, Some(7));
        assert_eq!(fetched.markup_bps, 5000);

        let err = repo.update_pricing("MISSING", Some(1), 0).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        let repo = db.catalog();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(&CatalogProduct::new("SCR-SS", "Screw", Some(5), 0, "each"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.deactivate("SCR-SS").await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
