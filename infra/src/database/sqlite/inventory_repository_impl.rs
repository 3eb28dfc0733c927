//! SQLite implementation of the InventoryRepository trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use gs_core::domain::entities::inventory::InventoryItem;
use gs_core::errors::DomainError;
use gs_core::repositories::InventoryRepository;

/// SQLite implementation of InventoryRepository
pub struct SqliteInventoryRepository {
    pool: SqlitePool,
}

impl SqliteInventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> Result<InventoryItem, DomainError> {
        let get_err = |column: &str, e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to get {}: {}", column, e),
        };

        let item_name: String = row.try_get("item_name").map_err(|e| get_err("item_name", e))?;
        let item_type: String = row.try_get("item_type").map_err(|e| get_err("item_type", e))?;
        let quantity: i64 = row.try_get("quantity").map_err(|e| get_err("quantity", e))?;
        let properties: Option<String> =
            row.try_get("properties").map_err(|e| get_err("properties", e))?;

        Ok(InventoryItem::new(
            item_name,
            item_type,
            quantity,
            properties.as_deref(),
        ))
    }
}

#[async_trait]
impl InventoryRepository for SqliteInventoryRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<InventoryItem>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT item_name, item_type, quantity, properties
            FROM inventory
            WHERE user_id = ?
            ORDER BY item_name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to load inventory: {}", e),
        })?;

        rows.iter().map(Self::row_to_item).collect()
    }
}
