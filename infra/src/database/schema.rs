//! Schema creation and demo data

use serde_json::json;
use sqlx::SqlitePool;

use gs_core::services::auth::hash_password;

use crate::InfrastructureError;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username VARCHAR(50) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_INVENTORY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        item_name VARCHAR(100) NOT NULL,
        item_type VARCHAR(50) NOT NULL,
        quantity INTEGER NOT NULL DEFAULT 1,
        properties VARCHAR(1000),
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_INVENTORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_inventory_user_id ON inventory (user_id)";

/// Demo accounts as `(username, password)`
pub const SAMPLE_USERS: [(&str, &str); 3] = [
    ("player1", "password123"),
    ("player2", "password456"),
    ("admin", "admin123"),
];

/// Create the `users` and `inventory` tables if they do not exist
pub async fn create_tables(pool: &SqlitePool) -> Result<(), InfrastructureError> {
    tracing::info!("Creating database tables");

    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_INVENTORY_TABLE).execute(pool).await?;
    sqlx::query(CREATE_INVENTORY_INDEX).execute(pool).await?;

    Ok(())
}

/// Insert the demo players and their items
///
/// Safe to run repeatedly: existing usernames are skipped and items are only
/// added while the inventory table is empty.
///
/// # Arguments
/// * `pool` - SQLite pool with the schema in place
/// * `password_hash_cost` - bcrypt cost for the demo passwords
pub async fn seed_sample_data(
    pool: &SqlitePool,
    password_hash_cost: u32,
) -> Result<(), InfrastructureError> {
    tracing::info!("Seeding sample data");

    for (username, password) in SAMPLE_USERS {
        let password_hash = tokio::task::spawn_blocking(move || {
            hash_password(password, password_hash_cost)
        })
        .await
        .map_err(|e| InfrastructureError::General(format!("Password hashing task failed: {}", e)))??;

        sqlx::query("INSERT OR IGNORE INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(pool)
            .await?;
    }

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Inventory already populated, skipping items");
        return Ok(());
    }

    let items = [
        ("player1", "Iron Sword", "weapon", 1, json!({"damage": 50, "durability": 100})),
        ("player1", "Health Potion", "consumable", 5, json!({"healing": 25})),
        ("player1", "Leather Armor", "armor", 1, json!({"defense": 20, "durability": 80})),
        ("player2", "Magic Staff", "weapon", 1, json!({"damage": 75, "mana_cost": 10})),
        ("player2", "Mana Potion", "consumable", 3, json!({"mana_restore": 50})),
        ("admin", "Admin Key", "special", 1, json!({"access_level": "admin"})),
    ];

    let mut tx = pool.begin().await?;
    for (owner, item_name, item_type, quantity, properties) in items {
        sqlx::query(
            r#"
            INSERT INTO inventory (user_id, item_name, item_type, quantity, properties)
            SELECT id, ?, ?, ?, ? FROM users WHERE username = ?
            "#,
        )
        .bind(item_name)
        .bind(item_type)
        .bind(quantity as i64)
        .bind(properties.to_string())
        .bind(owner)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!("Sample data seeded");

    Ok(())
}
