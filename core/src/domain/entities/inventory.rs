//! Inventory item entity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single inventory entry as returned to the owning player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_name: String,
    pub item_type: String,
    pub quantity: i64,
    /// Free-form item attributes; always a JSON object
    pub properties: Value,
}

impl InventoryItem {
    /// Creates an inventory item, normalizing the stored properties text
    ///
    /// # Arguments
    ///
    /// * `item_name` - Display name of the item
    /// * `item_type` - Category such as "weapon" or "consumable"
    /// * `quantity` - Stack size
    /// * `raw_properties` - JSON text as stored, if any
    pub fn new(
        item_name: impl Into<String>,
        item_type: impl Into<String>,
        quantity: i64,
        raw_properties: Option<&str>,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            item_type: item_type.into(),
            quantity,
            properties: Self::parse_properties(raw_properties),
        }
    }

    /// Parses stored properties text into a JSON object
    ///
    /// Missing, blank, unparsable or non-object text yields `{}`.
    pub fn parse_properties(raw: Option<&str>) -> Value {
        let parsed = raw
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .and_then(|text| serde_json::from_str::<Value>(text).ok());

        match parsed {
            Some(Value::Object(map)) => Value::Object(map),
            _ => Value::Object(Map::new()),
        }
    }
}
