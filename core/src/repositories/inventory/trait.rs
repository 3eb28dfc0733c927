//! Inventory repository trait for reading a player's items.

use async_trait::async_trait;

use crate::domain::entities::inventory::InventoryItem;
use crate::errors::DomainError;

/// Repository trait for inventory lookups
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// List every item owned by `user_id`, ordered by item name ascending
    ///
    /// # Arguments
    /// * `user_id` - Owning user's ID
    ///
    /// # Returns
    /// * `Ok(Vec<InventoryItem>)` - Possibly empty list of items
    /// * `Err(DomainError)` - Storage error
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<InventoryItem>, DomainError>;
}
