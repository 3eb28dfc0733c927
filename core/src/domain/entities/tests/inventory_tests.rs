//! Unit tests for inventory entities

use serde_json::json;

use crate::domain::entities::inventory::InventoryItem;

#[test]
fn test_properties_parsed_as_object() {
    let item = InventoryItem::new(
        "Iron Sword",
        "weapon",
        1,
        Some(r#"{"damage": 50, "durability": 100}"#),
    );

    assert_eq!(item.properties, json!({"damage": 50, "durability": 100}));
}

#[test]
fn test_missing_or_blank_properties_become_empty_object() {
    assert_eq!(InventoryItem::parse_properties(None), json!({}));
    assert_eq!(InventoryItem::parse_properties(Some("")), json!({}));
    assert_eq!(InventoryItem::parse_properties(Some("   ")), json!({}));
}

#[test]
fn test_invalid_properties_become_empty_object() {
    assert_eq!(InventoryItem::parse_properties(Some("{not json")), json!({}));
    assert_eq!(InventoryItem::parse_properties(Some("[1, 2, 3]")), json!({}));
    assert_eq!(InventoryItem::parse_properties(Some("42")), json!({}));
}

#[test]
fn test_item_serializes_with_snake_case_fields() {
    let item = InventoryItem::new("Health Potion", "consumable", 5, Some(r#"{"healing": 25}"#));
    let value = serde_json::to_value(&item).unwrap();

    assert_eq!(
        value,
        json!({
            "item_name": "Health Potion",
            "item_type": "consumable",
            "quantity": 5,
            "properties": {"healing": 25}
        })
    );
}
