use std::sync::Arc;

use crate::domain::entities::inventory::InventoryItem;
use crate::errors::DomainResult;
use crate::repositories::InventoryRepository;

/// Read-only access to a player's inventory
pub struct InventoryService<I>
where
    I: InventoryRepository,
{
    inventory_repository: Arc<I>,
}

impl<I> InventoryService<I>
where
    I: InventoryRepository,
{
    pub fn new(inventory_repository: Arc<I>) -> Self {
        Self {
            inventory_repository,
        }
    }

    /// Lists the items owned by `user_id`, ordered by item name
    ///
    /// An unknown user yields an empty list.
    pub async fn list_items(&self, user_id: i64) -> DomainResult<Vec<InventoryItem>> {
        let items = self.inventory_repository.find_by_user_id(user_id).await?;
        tracing::debug!(user_id, count = items.len(), "Inventory loaded");
        Ok(items)
    }
}
