use std::str::FromStr;

use cartwise_db::SqliteStorage;
use cartwise_shared::Storage;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

async fn setup_storage(dir: &TempDir) -> anyhow::Result<SqliteStorage> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    cartwise_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(SqliteStorage(pool))
}

#[tokio::test]
async fn missing_key_reads_as_none() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = setup_storage(&dir).await?;

    assert_eq!(storage.get("groceryItems").await?, None);

    Ok(())
}

#[tokio::test]
async fn set_overwrites_previous_value() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = setup_storage(&dir).await?;

    storage.set("groceryTheme", "\"light\"").await?;
    storage.set("groceryTheme", "\"dark\"").await?;

    assert_eq!(
        storage.get("groceryTheme").await?.as_deref(),
        Some("\"dark\"")
    );

    Ok(())
}

#[tokio::test]
async fn set_touches_only_the_given_key() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = setup_storage(&dir).await?;

    storage.set("groceryStorePrefs", "{}").await?;
    storage.set("groceryEmojiPrefs", "{\"milk\":\"🥛\"}").await?;
    storage.set("groceryStorePrefs", "{\"milk\":\"Costco\"}").await?;

    assert_eq!(
        storage.get("groceryStorePrefs").await?.as_deref(),
        Some("{\"milk\":\"Costco\"}")
    );
    assert_eq!(
        storage.get("groceryEmojiPrefs").await?.as_deref(),
        Some("{\"milk\":\"🥛\"}")
    );

    Ok(())
}

#[tokio::test]
async fn migrations_are_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = setup_storage(&dir).await?;
    storage.set("groceryItems", "[]").await?;

    let mut conn = storage.0.acquire().await?;
    cartwise_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    assert_eq!(storage.get("groceryItems").await?.as_deref(), Some("[]"));

    Ok(())
}
