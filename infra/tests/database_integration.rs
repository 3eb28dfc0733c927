//! Integration tests for schema, seeding and the SQLite repositories

use serde_json::json;

use gs_core::repositories::{InventoryRepository, UserRepository};
use gs_core::services::auth::verify_password;
use gs_infra::database::schema;
use gs_infra::{DatabasePool, SqliteInventoryRepository, SqliteUserRepository};
use gs_shared::config::DatabaseConfig;

// Lowest cost bcrypt accepts; keeps seeding fast
const TEST_COST: u32 = 4;

async fn seeded_pool() -> DatabasePool {
    let config = DatabaseConfig::new("sqlite::memory:").with_password_hash_cost(TEST_COST);
    gs_infra::initialize(&config).await.unwrap()
}

#[tokio::test]
async fn test_seeded_users_have_bcrypt_passwords() {
    let pool = seeded_pool().await;
    let repo = SqliteUserRepository::new(pool.get_pool().clone());

    let user = repo.find_by_username("player1").await.unwrap().unwrap();
    assert_eq!(user.id, 1);
    assert_ne!(user.password_hash, "password123");
    assert!(verify_password("password123".to_string(), user.password_hash)
        .await
        .unwrap());

    let admin = repo.find_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.id, 3);
}

#[tokio::test]
async fn test_find_by_username_is_exact() {
    let pool = seeded_pool().await;
    let repo = SqliteUserRepository::new(pool.get_pool().clone());

    assert!(repo.find_by_username("nonexistent").await.unwrap().is_none());
    assert!(repo.find_by_username("Player1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_inventory_is_ordered_by_item_name() {
    let pool = seeded_pool().await;
    let repo = SqliteInventoryRepository::new(pool.get_pool().clone());

    let items = repo.find_by_user_id(1).await.unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(names, vec!["Health Potion", "Iron Sword", "Leather Armor"]);

    assert_eq!(items[0].item_type, "consumable");
    assert_eq!(items[0].quantity, 5);
    assert_eq!(items[0].properties, json!({"healing": 25}));
    assert_eq!(items[1].properties, json!({"damage": 50, "durability": 100}));
}

#[tokio::test]
async fn test_inventory_per_user() {
    let pool = seeded_pool().await;
    let repo = SqliteInventoryRepository::new(pool.get_pool().clone());

    let player2 = repo.find_by_user_id(2).await.unwrap();
    assert_eq!(player2.len(), 2);
    assert_eq!(player2[0].item_name, "Magic Staff");
    assert_eq!(player2[1].properties, json!({"mana_restore": 50}));

    let admin = repo.find_by_user_id(3).await.unwrap();
    assert_eq!(admin.len(), 1);
    assert_eq!(admin[0].properties, json!({"access_level": "admin"}));

    assert!(repo.find_by_user_id(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let pool = seeded_pool().await;

    schema::seed_sample_data(pool.get_pool(), TEST_COST).await.unwrap();

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool.get_pool())
        .await
        .unwrap();
    let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
        .fetch_one(pool.get_pool())
        .await
        .unwrap();

    assert_eq!(users, 3);
    assert_eq!(items, 6);
}

#[tokio::test]
async fn test_unparsable_properties_become_empty_object() {
    let pool = seeded_pool().await;

    for (name, properties) in [("Broken", Some("{oops")), ("Plain", None), ("Listy", Some("[1]"))] {
        sqlx::query(
            "INSERT INTO inventory (user_id, item_name, item_type, quantity, properties) VALUES (3, ?, 'misc', 1, ?)",
        )
        .bind(name)
        .bind(properties)
        .execute(pool.get_pool())
        .await
        .unwrap();
    }

    let repo = SqliteInventoryRepository::new(pool.get_pool().clone());
    let items = repo.find_by_user_id(3).await.unwrap();
    assert_eq!(items.len(), 4);
    for item in items.iter().filter(|i| i.item_name != "Admin Key") {
        assert_eq!(item.properties, json!({}), "item {}", item.item_name);
    }
}

#[tokio::test]
async fn test_schema_without_seed_is_empty() {
    let config = DatabaseConfig::new("sqlite::memory:");
    let pool = DatabasePool::new(&config).await.unwrap();
    schema::create_tables(pool.get_pool()).await.unwrap();
    // Creating twice is harmless
    schema::create_tables(pool.get_pool()).await.unwrap();

    let repo = SqliteUserRepository::new(pool.get_pool().clone());
    assert!(repo.find_by_username("player1").await.unwrap().is_none());
}
