use serde::{Deserialize, Serialize};

use gs_core::domain::entities::inventory::InventoryItem;

/// Body returned by `GET /api/inventory`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryResponse {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub inventory: Vec<InventoryItem>,
}
