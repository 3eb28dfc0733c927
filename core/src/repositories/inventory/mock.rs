//! Mock implementation of InventoryRepository for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::inventory::InventoryItem;
use crate::errors::DomainError;

use super::trait_::InventoryRepository;

/// Mock inventory repository storing `(user_id, item)` pairs
pub struct MockInventoryRepository {
    pub items: Arc<Mutex<Vec<(i64, InventoryItem)>>>,
    pub should_fail: bool,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn with_items(items: Vec<(i64, InventoryItem)>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }
}

impl Default for MockInventoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<InventoryItem>, DomainError> {
        if self.should_fail {
            return Err(DomainError::Internal {
                message: "database unavailable".to_string(),
            });
        }

        let items = self.items.lock().unwrap();
        let mut owned: Vec<InventoryItem> = items
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, item)| item.clone())
            .collect();
        owned.sort_by(|a, b| a.item_name.cmp(&b.item_name));
        Ok(owned)
    }
}
